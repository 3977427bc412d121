//! Matcher unit interpreter.
//!
//! `matches` evaluates only the predicate and never touches captures.
//! `extract` assumes the predicate already held for the node.

use grafter_core::Interner;
use grafter_program::{Condition, Extraction, LanguageProgram, MatcherId, MatcherUnit, TypeTest};

use super::extracted::Extracted;
use super::tree::Node;

#[derive(Clone, Copy)]
pub struct MatcherVm<'p> {
    language: &'p LanguageProgram,
    strings: &'p Interner,
}

impl<'p> MatcherVm<'p> {
    pub fn new(language: &'p LanguageProgram, strings: &'p Interner) -> Self {
        Self { language, strings }
    }

    pub fn matches<N: Node>(&self, id: MatcherId, node: &N) -> bool {
        let unit = self.language.matcher(id);
        let holds = unit.conditions.iter().all(|c| self.holds(unit, c, node));
        holds != unit.negated
    }

    /// Write the captures of `id` for `node`.
    ///
    /// With `accumulate`, node captures append to a list instead of
    /// replacing it (repeated items).
    pub fn extract<N: Node>(
        &self,
        id: MatcherId,
        node: &N,
        captures: &mut Extracted<N>,
        accumulate: bool,
    ) {
        let unit = self.language.matcher(id);
        let children = node.children();

        for extraction in &unit.extractions {
            match extraction {
                Extraction::Node(hole) => {
                    if accumulate {
                        captures.push_node(*hole, node.clone());
                    } else {
                        captures.bind_node(*hole, node.clone());
                    }
                }
                Extraction::Data(hole) => {
                    if let Some(data) = node.data() {
                        captures.bind_data(*hole, data);
                    }
                }
                Extraction::Child { hole, index } => {
                    let Some(child) = children.get(*index) else {
                        continue;
                    };
                    if accumulate {
                        captures.push_node(*hole, child.clone());
                    } else {
                        captures.bind_nodes(*hole, vec![child.clone()]);
                    }
                }
                Extraction::Remaining { hole, start } => {
                    let rest = children.get(*start..).unwrap_or_default();
                    if accumulate {
                        captures.extend_nodes(*hole, rest.iter().cloned());
                    } else {
                        captures.bind_nodes(*hole, rest.to_vec());
                    }
                }
                Extraction::Nested { index, matcher } => {
                    if let Some(child) = children.get(*index) {
                        self.extract(*matcher, child, captures, accumulate);
                    }
                }
                Extraction::FirstOf(ids) => {
                    if let Some(first) = ids.iter().find(|id| self.matches(**id, node)) {
                        self.extract(*first, node, captures, accumulate);
                    }
                }
                Extraction::Each(ids) => {
                    for id in ids {
                        self.extract(*id, node, captures, accumulate);
                    }
                }
            }
        }
    }

    fn holds<N: Node>(&self, unit: &MatcherUnit, cond: &Condition, node: &N) -> bool {
        match cond {
            Condition::Type(test) => self.is_a(node, test),
            Condition::ChildCount(count) => node.children().len() == *count,
            Condition::MinChildCount(count) => node.children().len() >= *count,
            Condition::DataEquals(expected) => node.data() == Some(expected.as_str()),
            Condition::HasData => node.data().is_some(),
            Condition::CharRange { first, last } => {
                node.children().is_empty()
                    && node.data().is_some_and(|data| {
                        let mut chars = data.chars();
                        matches!(
                            (chars.next(), chars.next()),
                            (Some(c), None) if (*first..=*last).contains(&c)
                        )
                    })
            }
            Condition::Child { index, matcher } => node
                .children()
                .get(*index)
                .is_some_and(|child| self.matches(*matcher, child)),
            Condition::RemainingChildren { start, types } => node
                .children()
                .iter()
                .skip(*start)
                .all(|child| self.is_a(child, types)),
            Condition::MatchesChildren => unit
                .children_procedure
                .iter()
                .all(|c| self.holds(unit, c, node)),
            Condition::AnyOf(ids) => ids.iter().any(|id| self.matches(*id, node)),
            Condition::AllOf(ids) => ids.iter().all(|id| self.matches(*id, node)),
        }
    }

    fn is_a<N: Node>(&self, node: &N, test: &TypeTest) -> bool {
        self.strings
            .get(node.node_type())
            .is_some_and(|symbol| test.accepts(symbol))
    }
}
