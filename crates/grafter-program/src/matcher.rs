//! Matcher units: compiled predicate + extraction for one pattern item.
//!
//! A unit is evaluated in two phases. The predicate (`conditions`, with
//! `negated` applied to their conjunction) is pure. Extraction runs only after
//! the enclosing strategy has accepted the node, so a failed alternative never
//! leaves partial captures behind.

use grafter_core::Symbol;

use crate::ids::{Hole, MatcherId};

/// Node type membership test, resolved against the type hierarchy at
/// compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeTest {
    /// The type named in the pattern.
    pub name: Symbol,
    /// Every type that is-a `name`, including `name` itself.
    pub accepts: Vec<Symbol>,
}

impl TypeTest {
    /// Test against a type with no known subtypes.
    pub fn exact(name: Symbol) -> Self {
        Self {
            name,
            accepts: vec![name],
        }
    }

    #[inline]
    pub fn accepts(&self, node_type: Symbol) -> bool {
        self.accepts.contains(&node_type)
    }
}

/// One conjunct of a matcher predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Type(TypeTest),
    ChildCount(usize),
    MinChildCount(usize),
    DataEquals(String),
    HasData,
    /// Leaf node whose data is exactly one character in `first..=last`.
    CharRange { first: char, last: char },
    /// The child at `index` exists and satisfies `matcher`.
    Child { index: usize, matcher: MatcherId },
    /// Every child from `start` on is-a the given type.
    RemainingChildren { start: usize, types: TypeTest },
    /// Evaluates the unit's auxiliary `children_procedure`.
    MatchesChildren,
    AnyOf(Vec<MatcherId>),
    AllOf(Vec<MatcherId>),
}

/// One step writing into the capture set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extraction {
    /// Capture the matched node itself.
    Node(Hole),
    /// Capture the matched node's data string.
    Data(Hole),
    /// Capture the child at `index` as a one-element list.
    Child { hole: Hole, index: usize },
    /// Capture the children from `start` on as a list.
    Remaining { hole: Hole, start: usize },
    /// Run the extraction of `matcher` on the child at `index`.
    Nested { index: usize, matcher: MatcherId },
    /// Run the extraction of the first alternative whose predicate holds.
    FirstOf(Vec<MatcherId>),
    /// Run the extraction of every listed matcher.
    Each(Vec<MatcherId>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherUnit {
    pub id: MatcherId,
    /// Synthetic name, unique within the language.
    pub name: String,
    /// Canonical pattern text; the deduplication key.
    pub key: String,
    pub negated: bool,
    pub conditions: Vec<Condition>,
    /// Child conjuncts moved out of `conditions` when there are too many to
    /// keep inline. Empty when unused.
    pub children_procedure: Vec<Condition>,
    pub extractions: Vec<Extraction>,
}

impl MatcherUnit {
    /// Whether a successful match writes anything into the capture set.
    pub fn extracts(&self) -> bool {
        !self.extractions.is_empty()
    }

    /// Nested matchers referenced by this unit, in first-reference order.
    pub fn dependencies(&self) -> Vec<MatcherId> {
        let mut deps = Vec::new();
        let mut push = |id: MatcherId| {
            if !deps.contains(&id) {
                deps.push(id);
            }
        };

        for cond in self.conditions.iter().chain(&self.children_procedure) {
            match cond {
                Condition::Child { matcher, .. } => push(*matcher),
                Condition::AnyOf(ids) | Condition::AllOf(ids) => {
                    ids.iter().copied().for_each(&mut push)
                }
                _ => {}
            }
        }
        for extraction in &self.extractions {
            match extraction {
                Extraction::Nested { matcher, .. } => push(*matcher),
                Extraction::FirstOf(ids) | Extraction::Each(ids) => {
                    ids.iter().copied().for_each(&mut push)
                }
                _ => {}
            }
        }
        deps
    }

    /// Holes written directly by this unit (not through nested matchers).
    pub fn direct_holes(&self) -> Vec<Hole> {
        self.extractions
            .iter()
            .filter_map(|e| match e {
                Extraction::Node(hole)
                | Extraction::Data(hole)
                | Extraction::Child { hole, .. }
                | Extraction::Remaining { hole, .. } => Some(*hole),
                _ => None,
            })
            .collect()
    }
}
