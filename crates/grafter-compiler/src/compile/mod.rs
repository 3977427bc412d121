//! Rule compilers.
//!
//! - `matcher`: pattern items to deduplicated matcher units
//! - `strategy`: left sides to consumption strategies
//! - `builder`: right sides to builder procedures
//! - `registry`: rules to rule programs, grouped by language

pub mod builder;
pub mod matcher;
pub mod naming;
pub mod registry;
pub mod session;
pub mod strategy;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod matcher_tests;

pub use builder::compile_result;
pub use matcher::compile_item;
pub use registry::{compile_file, compile_rule};
pub use session::CompileSession;
pub use strategy::{compile_strategy, min_consumed};
