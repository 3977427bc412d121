//! Matcher compiler: one pattern item to one deduplicated matcher unit.
//!
//! Nested items are compiled first, so a unit only ever references
//! lower ids.

use grafter_program::{Condition, Extraction, MatcherId};
use tracing::{debug, trace};

use super::session::{CompileSession, UnitParts};
use crate::model::{DataPattern, PatternItem, PatternKind};

/// Compile `item` (ignoring its top-level mode) and return its matcher.
///
/// An item whose canonical text is already registered reuses that unit.
pub fn compile_item(session: &mut CompileSession<'_>, item: &PatternItem) -> MatcherId {
    let key = item.canonical();
    if let Some(id) = session.lookup(&key) {
        trace!(%id, key = %key, "reusing matcher");
        return id;
    }

    let mut parts = match &item.kind {
        PatternKind::Fixed {
            node_type,
            data,
            children,
        } => compile_fixed(session, node_type, data.as_ref(), children),
        PatternKind::TypedHole {
            node_type, hole, ..
        } => UnitParts {
            conditions: vec![Condition::Type(session.type_test(node_type))],
            extractions: vec![Extraction::Node(*hole)],
            ..UnitParts::default()
        },
        PatternKind::UntypedHole { hole, .. } => UnitParts {
            extractions: vec![Extraction::Node(*hole)],
            ..UnitParts::default()
        },
        PatternKind::SymbolRange { first, last, data } => UnitParts {
            conditions: vec![Condition::CharRange {
                first: *first,
                last: *last,
            }],
            extractions: data.iter().map(|hole| Extraction::Data(*hole)).collect(),
            ..UnitParts::default()
        },
        PatternKind::Or(items) => {
            let ids = compile_all(session, items);
            let extracting = extracting(session, &ids);
            UnitParts {
                conditions: vec![Condition::AnyOf(ids.clone())],
                extractions: if extracting.is_empty() {
                    Vec::new()
                } else {
                    vec![Extraction::FirstOf(ids)]
                },
                ..UnitParts::default()
            }
        }
        PatternKind::And(items) => {
            let ids = compile_all(session, items);
            let extracting = extracting(session, &ids);
            UnitParts {
                conditions: vec![Condition::AllOf(ids)],
                extractions: if extracting.is_empty() {
                    Vec::new()
                } else {
                    vec![Extraction::Each(extracting)]
                },
                ..UnitParts::default()
            }
        }
        PatternKind::Rest => UnitParts::default(),
    };

    // A negated typed hole binds the node that failed the type test.
    if item.negated && !matches!(item.kind, PatternKind::TypedHole { .. }) {
        parts.extractions.clear();
    }

    let base = base_name(item);
    let id = session.insert_matcher(key, &base, item.negated, parts);
    debug!(
        %id,
        name = %session.matcher(id).name,
        key = %session.matcher(id).key,
        "compiled matcher"
    );
    id
}

fn compile_all(session: &mut CompileSession<'_>, items: &[PatternItem]) -> Vec<MatcherId> {
    items.iter().map(|item| compile_item(session, item)).collect()
}

fn extracting(session: &CompileSession<'_>, ids: &[MatcherId]) -> Vec<MatcherId> {
    ids.iter()
        .copied()
        .filter(|id| session.matcher(*id).extracts())
        .collect()
}

fn compile_fixed(
    session: &mut CompileSession<'_>,
    node_type: &str,
    data: Option<&DataPattern>,
    children: &[PatternItem],
) -> UnitParts {
    let mut conditions = vec![Condition::Type(session.type_test(node_type))];
    let mut extractions = Vec::new();

    match children.iter().position(PatternItem::is_ellipsis) {
        Some(start) => conditions.push(Condition::MinChildCount(start)),
        None => conditions.push(Condition::ChildCount(children.len())),
    }

    match data {
        Some(DataPattern::Static(s)) => conditions.push(Condition::DataEquals(s.clone())),
        Some(DataPattern::Hole(hole)) => {
            conditions.push(Condition::HasData);
            extractions.push(Extraction::Data(*hole));
        }
        None => {}
    }

    let mut child_conditions = Vec::new();
    for (index, child) in children.iter().enumerate() {
        match &child.kind {
            PatternKind::UntypedHole {
                hole,
                ellipsis: false,
            } => extractions.push(Extraction::Child { hole: *hole, index }),
            PatternKind::UntypedHole {
                hole,
                ellipsis: true,
            } => extractions.push(Extraction::Remaining {
                hole: *hole,
                start: index,
            }),
            PatternKind::TypedHole {
                node_type,
                hole,
                ellipsis: true,
            } => {
                child_conditions.push(Condition::RemainingChildren {
                    start: index,
                    types: session.type_test(node_type),
                });
                extractions.push(Extraction::Remaining {
                    hole: *hole,
                    start: index,
                });
            }
            PatternKind::TypedHole {
                hole,
                ellipsis: false,
                ..
            } => {
                let matcher = compile_item(session, child);
                child_conditions.push(Condition::Child { index, matcher });
                extractions.push(Extraction::Child { hole: *hole, index });
            }
            PatternKind::Rest => {}
            _ => {
                let matcher = compile_item(session, child);
                child_conditions.push(Condition::Child { index, matcher });
                if session.matcher(matcher).extracts() {
                    extractions.push(Extraction::Nested { index, matcher });
                }
            }
        }
    }

    let mut children_procedure = Vec::new();
    if child_conditions.len() > session.config().children_inline_limit {
        conditions.push(Condition::MatchesChildren);
        children_procedure = child_conditions;
    } else {
        conditions.extend(child_conditions);
    }

    UnitParts {
        conditions,
        children_procedure,
        extractions,
    }
}

fn base_name(item: &PatternItem) -> String {
    let base = match &item.kind {
        PatternKind::Fixed { node_type, .. } | PatternKind::TypedHole { node_type, .. } => {
            node_type.as_str()
        }
        PatternKind::UntypedHole { .. } => "Hole",
        PatternKind::SymbolRange { .. } => "Symbol",
        PatternKind::Or(_) => "Or",
        PatternKind::And(_) => "And",
        PatternKind::Rest => "Any",
    };
    if item.negated {
        format!("Not{base}")
    } else {
        base.to_string()
    }
}
