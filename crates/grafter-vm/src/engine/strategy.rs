//! Strategy execution over a sibling list.

use std::collections::VecDeque;

use grafter_program::{Checker, MatchMode, Strategy};

use super::extracted::Extracted;
use super::matcher::MatcherVm;
use super::tree::Node;

/// Successful consumption of a sibling window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyMatch<N> {
    pub consumed: usize,
    pub captures: Extracted<N>,
}

/// Run `strategy` on `siblings` starting at `index`.
///
/// `None` means no match; consumption is greedy and never backtracks.
pub fn run_strategy<N: Node>(
    vm: MatcherVm<'_>,
    strategy: &Strategy,
    siblings: &[N],
    index: usize,
) -> Option<StrategyMatch<N>> {
    match strategy {
        Strategy::Simple(checkers) => run_simple(vm, checkers, siblings, index),
        Strategy::Repeated(checker) => run_repeated(vm, checker, siblings, index),
        Strategy::Complex(checkers) => run_complex(vm, checkers, siblings, index),
    }
}

fn run_simple<N: Node>(
    vm: MatcherVm<'_>,
    checkers: &[Checker],
    siblings: &[N],
    index: usize,
) -> Option<StrategyMatch<N>> {
    if checkers.is_empty() {
        return None;
    }
    let window = siblings.get(index..index.checked_add(checkers.len())?)?;
    for (checker, node) in checkers.iter().zip(window) {
        if !vm.matches(checker.matcher, node) {
            return None;
        }
    }

    let mut captures = Extracted::new();
    for (checker, node) in checkers.iter().zip(window) {
        vm.extract(checker.matcher, node, &mut captures, false);
    }
    Some(StrategyMatch {
        consumed: window.len(),
        captures,
    })
}

fn run_repeated<N: Node>(
    vm: MatcherVm<'_>,
    checker: &Checker,
    siblings: &[N],
    index: usize,
) -> Option<StrategyMatch<N>> {
    let rest = siblings.get(index..)?;
    let consumed = rest
        .iter()
        .take_while(|node| vm.matches(checker.matcher, *node))
        .count();
    if consumed == 0 {
        return None;
    }

    let mut captures = Extracted::new();
    for node in &rest[..consumed] {
        vm.extract(checker.matcher, node, &mut captures, true);
    }
    Some(StrategyMatch { consumed, captures })
}

fn run_complex<N: Node>(
    vm: MatcherVm<'_>,
    checkers: &[Checker],
    siblings: &[N],
    index: usize,
) -> Option<StrategyMatch<N>> {
    let mut queue: VecDeque<&N> = siblings.get(index..)?.iter().collect();
    let initial = queue.len();
    let mut captures = Extracted::new();

    for checker in checkers {
        match checker.mode {
            MatchMode::Normal => {
                let node = queue.pop_front()?;
                if !vm.matches(checker.matcher, node) {
                    return None;
                }
                vm.extract(checker.matcher, node, &mut captures, false);
            }
            MatchMode::Optional => {
                if let Some(node) = queue.pop_front() {
                    if vm.matches(checker.matcher, node) {
                        vm.extract(checker.matcher, node, &mut captures, false);
                    } else {
                        queue.push_front(node);
                    }
                }
            }
            MatchMode::Repeated => {
                while let Some(node) = queue.pop_front() {
                    if !vm.matches(checker.matcher, node) {
                        queue.push_front(node);
                        break;
                    }
                    vm.extract(checker.matcher, node, &mut captures, true);
                }
            }
        }
    }

    let consumed = initial - queue.len();
    if consumed == 0 {
        return None;
    }
    Some(StrategyMatch { consumed, captures })
}
