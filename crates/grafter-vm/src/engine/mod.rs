//! Rule execution engine.
//!
//! A match attempt runs a rule's strategy over a sibling list, collecting
//! captures into a call-local [`Extracted`] set. On success the rule's
//! builder procedures turn the captures into a [`Replacement`].

mod converter;
mod error;
mod extracted;
mod factory;
mod matcher;
mod rule_engine;
mod strategy;
mod tree;

#[cfg(test)]
mod extracted_tests;

pub use converter::{Converter, Match, Replacement};
pub use error::RuntimeError;
pub use extracted::{Capture, Extracted};
pub use factory::{NodeBuilder, NodeFactory, TreeBuilder, TreeFactory};
pub use matcher::MatcherVm;
pub use rule_engine::{Applied, RuleEngine};
pub use strategy::{StrategyMatch, run_strategy};
pub use tree::{Fragment, Node, TreeNode};
