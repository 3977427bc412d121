//! Builder compiler: right-side items to builder procedures.

use grafter_program::{BuilderId, ChildSource, DataSource, ResultProgram};

use super::session::CompileSession;
use crate::model::{DataPattern, ResultingItem, ResultingKind};

pub fn compile_result(session: &mut CompileSession<'_>, item: &ResultingItem) -> ResultProgram {
    match &item.kind {
        ResultingKind::Null => ResultProgram::Null,
        ResultingKind::HoleRef(hole) => ResultProgram::Hole(*hole),
        ResultingKind::Subtree {
            node_type,
            data,
            children,
        } => ResultProgram::Subtree(compile_subtree(session, node_type, data.as_ref(), children)),
    }
}

/// Nested subtrees get their procedures first, so a parent always has a
/// higher id than the builders it invokes.
fn compile_subtree(
    session: &mut CompileSession<'_>,
    node_type: &str,
    data: Option<&DataPattern>,
    children: &[ResultingItem],
) -> BuilderId {
    let mut needs_captures = matches!(data, Some(DataPattern::Hole(_)));

    let mut sources = Vec::with_capacity(children.len());
    for child in children {
        let source = match &child.kind {
            ResultingKind::Null => ChildSource::Null,
            ResultingKind::HoleRef(hole) => {
                needs_captures = true;
                ChildSource::Hole(*hole)
            }
            ResultingKind::Subtree {
                node_type,
                data,
                children,
            } => {
                let nested = compile_subtree(session, node_type, data.as_ref(), children);
                needs_captures |= session.builder(nested).needs_captures;
                ChildSource::Builder(nested)
            }
        };
        sources.push(source);
    }

    let data = data.map(|data| match data {
        DataPattern::Static(s) => DataSource::Static(s.clone()),
        DataPattern::Hole(hole) => DataSource::Hole(*hole),
    });
    let node_type = session.intern(node_type);
    session.insert_builder(node_type, data, sources, needs_captures)
}
