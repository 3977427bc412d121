//! Right-side resulting items.

use std::fmt;

use grafter_program::Hole;
use rowan::TextRange;

use super::DataPattern;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultingKind {
    /// A new node of `node_type`.
    Subtree {
        node_type: String,
        data: Option<DataPattern>,
        children: Vec<ResultingItem>,
    },
    /// The capture under `hole`, verbatim.
    HoleRef(Hole),
    Null,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultingItem {
    pub kind: ResultingKind,
    pub range: TextRange,
}

impl ResultingItem {
    pub fn new(kind: ResultingKind) -> Self {
        Self {
            kind,
            range: TextRange::default(),
        }
    }

    pub fn subtree(
        node_type: impl Into<String>,
        data: Option<DataPattern>,
        children: Vec<ResultingItem>,
    ) -> Self {
        Self::new(ResultingKind::Subtree {
            node_type: node_type.into(),
            data,
            children,
        })
    }

    pub fn hole(hole: u32) -> Self {
        Self::new(ResultingKind::HoleRef(Hole(hole)))
    }

    pub fn null() -> Self {
        Self::new(ResultingKind::Null)
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    /// Holes read by this item and everything nested in it, in source order.
    pub fn holes(&self) -> Vec<(Hole, TextRange)> {
        let mut out = Vec::new();
        self.collect_holes(&mut out);
        out
    }

    fn collect_holes(&self, out: &mut Vec<(Hole, TextRange)>) {
        match &self.kind {
            ResultingKind::Subtree { data, children, .. } => {
                if let Some(DataPattern::Hole(hole)) = data {
                    out.push((*hole, self.range));
                }
                for child in children {
                    child.collect_holes(out);
                }
            }
            ResultingKind::HoleRef(hole) => out.push((*hole, self.range)),
            ResultingKind::Null => {}
        }
    }
}

impl fmt::Display for ResultingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResultingKind::Subtree {
                node_type,
                data,
                children,
            } => {
                f.write_str(node_type)?;
                if let Some(data) = data {
                    write!(f, "<{data}>")?;
                }
                if !children.is_empty() {
                    f.write_str("(")?;
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{child}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            ResultingKind::HoleRef(hole) => write!(f, "{hole}"),
            ResultingKind::Null => f.write_str("null"),
        }
    }
}
