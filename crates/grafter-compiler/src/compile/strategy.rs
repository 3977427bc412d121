//! Strategy selection for a rule's left side.

use grafter_program::{Checker, MatchMode, Strategy};
use tracing::debug;

use super::matcher::compile_item;
use super::naming::ORDINALS;
use super::session::CompileSession;
use crate::model::Rule;
use crate::{Error, Result};

/// Compile every left-side item and pick the consumption strategy.
pub fn compile_strategy(session: &mut CompileSession<'_>, rule: &Rule) -> Result<Strategy> {
    if rule.pattern.len() > ORDINALS.len() {
        return Err(Error::NamesExhausted {
            rule: rule.to_string(),
            limit: ORDINALS.len(),
        });
    }

    let mut checkers = Vec::with_capacity(rule.pattern.len());
    for (index, item) in rule.pattern.iter().enumerate() {
        checkers.push(Checker {
            name: ORDINALS[index],
            matcher: compile_item(session, item),
            mode: item.mode,
        });
    }

    let strategy = select(checkers);
    debug!(kind = strategy.kind_name(), rule = %rule, "selected strategy");
    Ok(strategy)
}

fn select(mut checkers: Vec<Checker>) -> Strategy {
    if checkers.iter().all(|c| c.mode == MatchMode::Normal) {
        return Strategy::Simple(checkers);
    }
    if checkers.len() == 1 && checkers[0].mode == MatchMode::Repeated {
        return Strategy::Repeated(checkers.remove(0));
    }
    Strategy::Complex(checkers)
}

/// Fewest siblings a successful match of `strategy` consumes.
pub fn min_consumed(strategy: &Strategy) -> usize {
    match strategy {
        Strategy::Simple(checkers) => checkers.len(),
        Strategy::Repeated(_) => 1,
        Strategy::Complex(checkers) => checkers
            .iter()
            .filter(|c| c.mode == MatchMode::Normal)
            .count()
            .max(1),
    }
}
