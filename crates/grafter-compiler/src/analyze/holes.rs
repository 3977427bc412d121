//! Hole registry: declared hole numbers of one rule's left side.
//!
//! A number may be declared once outside repeated items. Occurrences inside
//! repeated items accumulate and may repeat a number. Alternatives of one `|`
//! are mutually exclusive, so each may declare the same number: the walk
//! forks the registry per alternative and merges the forks afterwards.

use grafter_program::{Hole, MatchMode};
use indexmap::IndexMap;
use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::{DataPattern, PatternItem, PatternKind, Rule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleDecl {
    /// First occurrence of the number.
    pub range: TextRange,
    /// The occurrence outside repeated items, if any.
    pub single: Option<TextRange>,
}

#[derive(Clone, Debug, Default)]
pub struct HoleRegistry {
    declared: IndexMap<Hole, HoleDecl>,
}

impl HoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `hole`.
    ///
    /// Fails with the range of the earlier declaration when both occurrences
    /// are outside repeated items.
    pub fn declare(&mut self, hole: Hole, range: TextRange, repeated: bool) -> Result<(), TextRange> {
        let single = (!repeated).then_some(range);
        let Some(decl) = self.declared.get_mut(&hole) else {
            self.declared.insert(hole, HoleDecl { range, single });
            return Ok(());
        };
        if repeated {
            return Ok(());
        }
        match decl.single {
            Some(previous) => Err(previous),
            None => {
                decl.single = single;
                Ok(())
            }
        }
    }

    /// Independent copy for one alternative of a `|`.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Fold the declarations of a finished alternative back in.
    pub fn merge(&mut self, branch: HoleRegistry) {
        for (hole, decl) in branch.declared {
            match self.declared.get_mut(&hole) {
                Some(existing) => {
                    if existing.single.is_none() {
                        existing.single = decl.single;
                    }
                }
                None => {
                    self.declared.insert(hole, decl);
                }
            }
        }
    }

    pub fn is_declared(&self, hole: Hole) -> bool {
        self.declared.contains_key(&hole)
    }

    pub fn get(&self, hole: Hole) -> Option<&HoleDecl> {
        self.declared.get(&hole)
    }

    /// Declared holes, in first-declaration order.
    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ {
        self.declared.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

/// Declare every left-side hole of `rule` and check its right-side references.
pub fn check_holes(rule: &Rule, diagnostics: &mut Diagnostics) -> HoleRegistry {
    let mut checker = HoleChecker {
        rule,
        rule_text: rule.to_string(),
        diagnostics,
    };
    let mut registry = HoleRegistry::new();

    for item in &rule.pattern {
        checker.declare_item(&mut registry, item, item.mode == MatchMode::Repeated);
    }

    for (hole, range) in rule.result.holes() {
        if !registry.is_declared(hole) {
            checker
                .diagnostics
                .report(DiagnosticKind::UndeclaredHole, range)
                .message(hole.to_string())
                .related_to(format!("in rule `{}`", checker.rule_text), rule.range)
                .emit();
        }
    }

    registry
}

struct HoleChecker<'a> {
    rule: &'a Rule,
    rule_text: String,
    diagnostics: &'a mut Diagnostics,
}

impl HoleChecker<'_> {
    fn declare_item(&mut self, registry: &mut HoleRegistry, item: &PatternItem, repeated: bool) {
        match &item.kind {
            PatternKind::Fixed { data, children, .. } => {
                if let Some(DataPattern::Hole(hole)) = data {
                    self.declare(registry, *hole, item.range, repeated);
                }
                for child in children {
                    self.declare_item(registry, child, repeated);
                }
            }
            PatternKind::TypedHole { hole, .. } | PatternKind::UntypedHole { hole, .. } => {
                self.declare(registry, *hole, item.range, repeated);
            }
            PatternKind::SymbolRange { data, .. } => {
                if let Some(hole) = data {
                    self.declare(registry, *hole, item.range, repeated);
                }
            }
            PatternKind::Or(alternatives) => {
                let mut merged = registry.fork();
                for alternative in alternatives {
                    let mut branch = registry.fork();
                    self.declare_item(&mut branch, alternative, repeated);
                    merged.merge(branch);
                }
                *registry = merged;
            }
            PatternKind::And(items) => {
                for child in items {
                    self.declare_item(registry, child, repeated);
                }
            }
            PatternKind::Rest => {}
        }
    }

    fn declare(&mut self, registry: &mut HoleRegistry, hole: Hole, range: TextRange, repeated: bool) {
        if let Err(previous) = registry.declare(hole, range, repeated) {
            self.diagnostics
                .report(DiagnosticKind::DuplicateHole, range)
                .message(hole.to_string())
                .related_to("first declared here", previous)
                .related_to(format!("in rule `{}`", self.rule_text), self.rule.range)
                .emit();
        }
    }
}
