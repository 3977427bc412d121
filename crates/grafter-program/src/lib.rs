//! Compiled rule artifacts for Grafter.
//!
//! This crate contains the immutable descriptions the compiler emits and the
//! runtime executes:
//! - Matcher units (predicate + extraction), deduplicated per language
//! - Strategies consuming a window of siblings (simple, repeated, complex)
//! - Builder procedures constructing replacement subtrees
//! - Rule programs and per-language programs
//! - A human-readable dump for debugging

pub mod builder;
pub mod dump;
pub mod ids;
pub mod matcher;
pub mod module;
pub mod rule;
pub mod strategy;

#[cfg(test)]
mod matcher_tests;

pub use builder::{BuilderProc, ChildSource, DataSource, ResultProgram};
pub use dump::dump;
pub use ids::{BuilderId, Hole, MatcherId, RuleId};
pub use matcher::{Condition, Extraction, MatcherUnit, TypeTest};
pub use module::{LanguageProgram, Program};
pub use rule::RuleProgram;
pub use strategy::{Checker, MatchMode, Strategy};
