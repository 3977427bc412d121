//! Semantic analysis of parsed rules.
//!
//! Passes, per rule:
//! - `validation`: left-side shape constraints
//! - `holes`: hole declarations and right-side references
//! - `link`: type names against the hierarchy (only when one is given)

pub mod holes;
pub mod link;
pub mod validation;

#[cfg(test)]
mod validation_tests;

use grafter_core::TypeHierarchy;

pub use holes::{HoleDecl, HoleRegistry, check_holes};
pub use link::link_rule;
pub use validation::validate_rule;

use crate::diagnostics::Diagnostics;
use crate::model::RuleFile;

/// Run every analysis pass over `file`, collecting into `diagnostics`.
pub fn analyze_file(
    file: &RuleFile,
    hierarchy: Option<&dyn TypeHierarchy>,
    diagnostics: &mut Diagnostics,
) {
    for rule in file.rules() {
        validate_rule(rule, diagnostics);
        check_holes(rule, diagnostics);
        if let Some(hierarchy) = hierarchy {
            link_rule(rule, hierarchy, diagnostics);
        }
    }
}
