//! Sibling-window consumption strategies.

use crate::ids::MatcherId;

/// How many siblings one left-side item may consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Exactly one.
    #[default]
    Normal,
    /// Zero or one.
    Optional,
    /// Zero or more, greedy.
    Repeated,
}

/// One left-side item as seen by a strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checker {
    /// Ordinal name (`first`, `second`, ...).
    pub name: &'static str,
    pub matcher: MatcherId,
    pub mode: MatchMode,
}

/// Consumption logic for a rule's left side.
///
/// Selected structurally at compile time:
/// - `Simple` when every item is normal; item `k` tests sibling `index + k`
/// - `Repeated` when the left side is a single repeated item
/// - `Complex` for any other mix, driven by a working queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Simple(Vec<Checker>),
    Repeated(Checker),
    Complex(Vec<Checker>),
}

impl Strategy {
    pub fn checkers(&self) -> &[Checker] {
        match self {
            Strategy::Simple(checkers) | Strategy::Complex(checkers) => checkers,
            Strategy::Repeated(checker) => std::slice::from_ref(checker),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Strategy::Simple(_) => "simple",
            Strategy::Repeated(_) => "repeated",
            Strategy::Complex(_) => "complex",
        }
    }
}
