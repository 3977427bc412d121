//! Parser infrastructure for the rule language.
//!
//! # Architecture
//!
//! - [`lexer`]: Tokenizes source into span-based tokens
//! - `core`: Parser state machine with fuel limits and error reporting
//! - `grammar`: Recursive-descent productions building [`crate::model`] values
//!
//! The parser is resilient: it collects diagnostics and recovers at the next
//! `;` or `}` instead of stopping at the first error.

mod core;
mod grammar;
pub mod lexer;

#[cfg(test)]
mod lexer_tests;

pub use core::{ParseResult, Parser};
pub use lexer::{SyntaxKind, Token, lex, token_text};

use crate::config::CompileConfig;
use crate::model::RuleFile;
use crate::PassResult;

/// Parse a rule source with the limits and default language of `config`.
pub fn parse(source: &str, config: &CompileConfig) -> PassResult<RuleFile> {
    let ParseResult {
        file, diagnostics, ..
    } = Parser::new(
        source,
        lex(source),
        config.parse_fuel,
        config.recursion_limit,
        config.default_language.clone(),
    )
    .parse()?;
    Ok((file, diagnostics))
}
