use crate::builder::ResultProgram;
use crate::ids::RuleId;
use crate::strategy::Strategy;

/// A compiled rule: the "try rule at position" unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleProgram {
    pub id: RuleId,
    /// Source text of the rule statement.
    pub text: String,
    /// Byte span of the rule statement in its source.
    pub span: (u32, u32),
    pub strategy: Strategy,
    pub result: ResultProgram,
    /// Fewest siblings a successful match can consume.
    pub min_consumed: usize,
    /// Whether a match must compute the covered source fragment.
    pub needs_fragment: bool,
}
