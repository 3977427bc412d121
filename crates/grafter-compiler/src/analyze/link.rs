//! Link pass: resolve node type names against a type hierarchy.

use grafter_core::TypeHierarchy;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::{PatternItem, PatternKind, ResultingItem, ResultingKind, Rule};

pub fn link_rule(rule: &Rule, hierarchy: &dyn TypeHierarchy, diagnostics: &mut Diagnostics) {
    let mut linker = Linker {
        hierarchy,
        rule,
        rule_text: rule.to_string(),
        diagnostics,
    };
    for item in &rule.pattern {
        linker.link_pattern(item);
    }
    linker.link_result(&rule.result);
}

struct Linker<'a> {
    hierarchy: &'a dyn TypeHierarchy,
    rule: &'a Rule,
    rule_text: String,
    diagnostics: &'a mut Diagnostics,
}

impl Linker<'_> {
    fn report(&mut self, kind: DiagnosticKind, range: rowan::TextRange, node_type: &str) {
        self.diagnostics
            .report(kind, range)
            .message(node_type)
            .related_to(format!("in rule `{}`", self.rule_text), self.rule.range)
            .emit();
    }

    fn link_pattern(&mut self, item: &PatternItem) {
        if let Some(node_type) = item.node_type()
            && !self.hierarchy.contains(node_type)
        {
            self.report(DiagnosticKind::UnknownNodeType, item.range, node_type);
        }

        match &item.kind {
            PatternKind::Fixed { children, .. } => {
                for child in children {
                    self.link_pattern(child);
                }
            }
            PatternKind::Or(items) | PatternKind::And(items) => {
                for child in items {
                    self.link_pattern(child);
                }
            }
            _ => {}
        }
    }

    fn link_result(&mut self, item: &ResultingItem) {
        let ResultingKind::Subtree {
            node_type,
            children,
            ..
        } = &item.kind
        else {
            return;
        };

        if !self.hierarchy.contains(node_type) {
            self.report(DiagnosticKind::UnknownNodeType, item.range, node_type);
        } else if self.hierarchy.is_abstract(node_type) {
            self.report(DiagnosticKind::AbstractResultType, item.range, node_type);
        }

        for child in children {
            self.link_result(child);
        }
    }
}
