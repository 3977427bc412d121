//! Structural validation of left-side patterns.
//!
//! Every violation is a malformed-pattern diagnostic naming the offending
//! fragment, with a related note carrying the enclosing rule.

use grafter_program::MatchMode;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::{DataPattern, PatternItem, PatternKind, Rule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    /// A left-side item of the rule.
    Root,
    /// Directly inside `|` or `&`.
    Combinator,
    /// A child of a fixed node.
    Child { last: bool },
}

#[derive(Clone, Copy, Debug)]
struct Context {
    position: Position,
    /// Some ancestor is negated.
    negated: bool,
    /// Inside a repeated top-level item.
    repeated: bool,
}

pub fn validate_rule(rule: &Rule, diagnostics: &mut Diagnostics) {
    let mut validator = Validator {
        rule,
        rule_text: rule.to_string(),
        diagnostics,
    };
    if rule.pattern.is_empty() {
        let text = validator.rule_text.clone();
        validator
            .diagnostics
            .report(DiagnosticKind::EmptyPattern, rule.range)
            .message(text)
            .emit();
    }
    for item in &rule.pattern {
        let ctx = Context {
            position: Position::Root,
            negated: false,
            repeated: item.mode == MatchMode::Repeated,
        };
        validator.validate_item(item, ctx);
    }
}

struct Validator<'a> {
    rule: &'a Rule,
    rule_text: String,
    diagnostics: &'a mut Diagnostics,
}

impl Validator<'_> {
    fn report(&mut self, kind: DiagnosticKind, item: &PatternItem) {
        self.diagnostics
            .report(kind, item.range)
            .message(item.to_string())
            .related_to(format!("in rule `{}`", self.rule_text), self.rule.range)
            .emit();
    }

    fn validate_item(&mut self, item: &PatternItem, ctx: Context) {
        let is_combinator = matches!(item.kind, PatternKind::Or(_) | PatternKind::And(_));
        if item.mode != MatchMode::Normal && (ctx.position != Position::Root || is_combinator) {
            self.report(DiagnosticKind::ModeNotAllowed, item);
        }

        if item.negated
            && !matches!(
                item.kind,
                PatternKind::Fixed { .. } | PatternKind::TypedHole { .. } | PatternKind::Or(_)
            )
        {
            self.report(DiagnosticKind::NegationNotAllowed, item);
        }

        if item.is_ellipsis() {
            if ctx.position != (Position::Child { last: true }) {
                self.report(DiagnosticKind::MisplacedEllipsis, item);
            }
        } else if matches!(item.kind, PatternKind::UntypedHole { .. })
            && !matches!(ctx.position, Position::Child { .. })
        {
            self.report(DiagnosticKind::UntypedHoleAsNode, item);
        }

        // A negated node's own data hole is as unbindable as a nested one.
        let holes_blocked =
            ctx.negated || (item.negated && matches!(item.kind, PatternKind::Fixed { .. }));

        match &item.kind {
            PatternKind::Fixed { data, children, .. } => {
                if matches!(data, Some(DataPattern::Hole(_))) {
                    if holes_blocked {
                        self.report(DiagnosticKind::HoleUnderNegation, item);
                    } else if ctx.repeated {
                        self.report(DiagnosticKind::DataHoleInRepeated, item);
                    }
                }
                let negated = ctx.negated || item.negated;
                for (i, child) in children.iter().enumerate() {
                    let child_ctx = Context {
                        position: Position::Child {
                            last: i + 1 == children.len(),
                        },
                        negated,
                        repeated: ctx.repeated,
                    };
                    self.validate_item(child, child_ctx);
                }
            }
            PatternKind::TypedHole { .. } | PatternKind::UntypedHole { .. } => {
                if ctx.negated {
                    self.report(DiagnosticKind::HoleUnderNegation, item);
                }
            }
            PatternKind::SymbolRange { first, last, data } => {
                if first > last {
                    self.report(DiagnosticKind::InvalidSymbolRange, item);
                }
                if data.is_some() {
                    if ctx.negated {
                        self.report(DiagnosticKind::HoleUnderNegation, item);
                    } else if ctx.repeated {
                        self.report(DiagnosticKind::DataHoleInRepeated, item);
                    }
                }
            }
            PatternKind::Or(items) | PatternKind::And(items) => {
                if items.is_empty() {
                    self.report(DiagnosticKind::EmptyCombinator, item);
                }
                let inner = Context {
                    position: Position::Combinator,
                    negated: ctx.negated || item.negated,
                    repeated: ctx.repeated,
                };
                for child in items {
                    self.validate_item(child, inner);
                }
            }
            PatternKind::Rest => {}
        }
    }
}
