//! Per-rule match and build entry points.

use grafter_core::Interner;
use grafter_program::{
    BuilderId, ChildSource, DataSource, LanguageProgram, ResultProgram, RuleProgram,
};
use tracing::{debug, trace};

use super::extracted::{Capture, Extracted};
use super::factory::{NodeBuilder, NodeFactory};
use super::matcher::MatcherVm;
use super::strategy::run_strategy;
use super::tree::{Fragment, Node};

/// A successful left-side match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<N> {
    pub consumed: usize,
    pub captures: Extracted<N>,
    /// Source covered by the consumed nodes; only computed when the rule
    /// builds a new subtree or deletes.
    pub fragment: Option<Fragment>,
}

/// What replaces the consumed nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Replacement<N> {
    Delete,
    Node(N),
    Nodes(Vec<N>),
}

impl<N> Replacement<N> {
    pub fn into_nodes(self) -> Vec<N> {
        match self {
            Replacement::Delete => Vec::new(),
            Replacement::Node(node) => vec![node],
            Replacement::Nodes(nodes) => nodes,
        }
    }
}

/// Executable view of one compiled rule.
#[derive(Clone, Copy)]
pub struct Converter<'p> {
    rule: &'p RuleProgram,
    language: &'p LanguageProgram,
    strings: &'p Interner,
}

impl<'p> Converter<'p> {
    pub fn new(
        rule: &'p RuleProgram,
        language: &'p LanguageProgram,
        strings: &'p Interner,
    ) -> Self {
        Self {
            rule,
            language,
            strings,
        }
    }

    pub fn rule(&self) -> &'p RuleProgram {
        self.rule
    }

    /// Try the rule's left side at `siblings[index]`.
    pub fn try_match<N: Node>(&self, siblings: &[N], index: usize) -> Option<Match<N>> {
        if index.saturating_add(self.rule.min_consumed) > siblings.len() {
            trace!(rule = %self.rule.id, index, "too few siblings left");
            return None;
        }

        let vm = MatcherVm::new(self.language, self.strings);
        let matched = run_strategy(vm, &self.rule.strategy, siblings, index)?;

        let fragment = if self.rule.needs_fragment {
            Fragment::cover(
                siblings[index..index + matched.consumed]
                    .iter()
                    .filter_map(|node| node.fragment()),
            )
        } else {
            None
        };

        Some(Match {
            consumed: matched.consumed,
            captures: matched.captures,
            fragment,
        })
    }

    /// Build the rule's right side from a match.
    ///
    /// `None` when the factory rejects a type, a value, or the finished node.
    pub fn build<F: NodeFactory>(
        &self,
        factory: &F,
        matched: &Match<F::Node>,
    ) -> Option<Replacement<F::Node>> {
        match &self.rule.result {
            ResultProgram::Null => Some(Replacement::Delete),
            ResultProgram::Hole(hole) => match matched.captures.get(*hole) {
                Some(Capture::Node(node)) => Some(Replacement::Node(node.clone())),
                Some(Capture::Nodes(nodes)) => Some(Replacement::Nodes(nodes.clone())),
                Some(Capture::Data(_)) => None,
                None => Some(Replacement::Delete),
            },
            ResultProgram::Subtree(id) => self
                .build_subtree(factory, *id, &matched.captures, matched.fragment)
                .map(Replacement::Node),
        }
    }

    fn build_subtree<F: NodeFactory>(
        &self,
        factory: &F,
        id: BuilderId,
        captures: &Extracted<F::Node>,
        fragment: Option<Fragment>,
    ) -> Option<F::Node> {
        let proc = self.language.builder(id);
        let node_type = self.strings.resolve(proc.node_type);

        let Some(mut builder) = factory.builder(node_type) else {
            debug!(rule = %self.rule.id, node_type, "factory rejected type");
            return None;
        };

        let data = match &proc.data {
            Some(DataSource::Static(data)) => Some(data.as_str()),
            Some(DataSource::Hole(hole)) => captures.data(*hole),
            None => None,
        };
        if let Some(data) = data
            && !builder.set_data(data)
        {
            debug!(rule = %self.rule.id, node_type, data, "factory rejected data");
            return None;
        }

        let mut children = Vec::with_capacity(proc.children.len());
        for source in &proc.children {
            match source {
                ChildSource::Hole(hole) => {
                    if let Some(capture) = captures.get(*hole) {
                        children.extend_from_slice(capture.as_nodes()?);
                    }
                }
                ChildSource::Builder(nested) => {
                    children.push(self.build_subtree(factory, *nested, captures, None)?);
                }
                ChildSource::Null => {}
            }
        }

        if !builder.set_children(children) || !builder.is_valid() {
            debug!(rule = %self.rule.id, node_type, "factory rejected node");
            return None;
        }
        if let Some(fragment) = fragment {
            builder.set_fragment(fragment);
        }
        Some(builder.build())
    }
}
