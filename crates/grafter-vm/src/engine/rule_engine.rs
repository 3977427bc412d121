//! Rule application over sibling lists.

use grafter_program::{Program, RuleId};
use tracing::{debug, trace};

use super::converter::{Converter, Replacement};
use super::error::RuntimeError;
use super::factory::NodeFactory;
use super::tree::Node;

/// One rule applied at one position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied<N> {
    pub rule: RuleId,
    pub consumed: usize,
    pub replacement: Replacement<N>,
}

/// The rules of one language, tried in declaration order.
pub struct RuleEngine<'p> {
    language: &'p str,
    converters: Vec<Converter<'p>>,
}

impl<'p> RuleEngine<'p> {
    pub fn new(program: &'p Program, language: &str) -> Result<Self, RuntimeError> {
        let Some(compiled) = program.language(language) else {
            return Err(RuntimeError::UnknownLanguage(language.to_owned()));
        };
        let converters = compiled
            .rules
            .iter()
            .map(|rule| Converter::new(rule, compiled, program.strings()))
            .collect();
        Ok(Self {
            language: &compiled.name,
            converters,
        })
    }

    pub fn language(&self) -> &'p str {
        self.language
    }

    pub fn converters(&self) -> &[Converter<'p>] {
        &self.converters
    }

    /// First rule that both matches at `index` and builds a result.
    pub fn apply_at<N, F>(&self, siblings: &[N], index: usize, factory: &F) -> Option<Applied<N>>
    where
        N: Node,
        F: NodeFactory<Node = N>,
    {
        for converter in &self.converters {
            let rule = converter.rule();
            let Some(matched) = converter.try_match(siblings, index) else {
                continue;
            };
            let Some(replacement) = converter.build(factory, &matched) else {
                debug!(rule = %rule.id, index, "builder produced no result");
                continue;
            };
            trace!(rule = %rule.id, index, consumed = matched.consumed, "applied rule");
            return Some(Applied {
                rule: rule.id,
                consumed: matched.consumed,
                replacement,
            });
        }
        None
    }

    /// One left-to-right pass over `siblings`. Positions where no rule
    /// applies keep their node.
    pub fn rewrite<N, F>(&self, siblings: &[N], factory: &F) -> Vec<N>
    where
        N: Node,
        F: NodeFactory<Node = N>,
    {
        let mut out = Vec::with_capacity(siblings.len());
        let mut index = 0;
        while index < siblings.len() {
            match self.apply_at(siblings, index, factory) {
                Some(applied) => {
                    out.extend(applied.replacement.into_nodes());
                    index += applied.consumed;
                }
                None => {
                    out.push(siblings[index].clone());
                    index += 1;
                }
            }
        }
        out
    }
}
