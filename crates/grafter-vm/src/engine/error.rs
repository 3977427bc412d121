//! Runtime errors.

/// Errors raised while setting up rule execution.
///
/// A rule that does not match, or whose builder is rejected, is not an
/// error: those outcomes are `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("no rules compiled for language `{0}`")]
    UnknownLanguage(String),
}
