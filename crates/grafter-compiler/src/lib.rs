//! Grafter compiler: parser, analyzer, and rule compilers.
//!
//! This crate turns tree-rewriting rules into the artifacts of
//! `grafter-program`:
//! - `parser` - lexer and recursive-descent parser for the rule language
//! - `model` - pattern (left side) and resulting (right side) items
//! - `analyze` - pattern validation, hole registry, type linking
//! - `compile` - matcher, strategy and builder compilers, rule registry
//! - `diagnostics` - error reporting
//! - `rule_set` - high-level staged facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod model;
pub mod parser;
pub mod rule_set;

#[cfg(test)]
pub mod test_utils;

pub use config::CompileConfig;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use rule_set::{RuleSetAnalyzed, RuleSetBuilder, RuleSetParsed};

/// Result type for passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

/// Errors that can occur while compiling rules.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("rule parsing failed with {} errors", .0.error_count())]
    RuleParseError(Diagnostics),

    #[error("rule analysis failed with {} errors", .0.error_count())]
    RuleAnalyzeError(Diagnostics),

    /// A rule has more left-side items than there are checker names.
    #[error("rule `{rule}` has more than {limit} left-side items")]
    NamesExhausted { rule: String, limit: usize },
}

/// Result type for rule compilation.
pub type Result<T> = std::result::Result<T, Error>;
