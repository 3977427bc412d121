//! Runtime for applying compiled Grafter rules to syntax trees.
//!
//! This crate interprets the artifacts of `grafter-program` against any tree
//! implementing [`Node`], building replacements through a [`NodeFactory`].

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Applied, Capture, Converter, Extracted, Fragment, Match, MatcherVm, Node, NodeBuilder,
    NodeFactory, Replacement, RuleEngine, RuntimeError, StrategyMatch, TreeBuilder, TreeFactory,
    TreeNode, run_strategy,
};
