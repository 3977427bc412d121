//! Builder procedures: construction logic for a rule's right side.

use grafter_core::Symbol;

use crate::ids::{BuilderId, Hole};

/// Where a built node's data comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Static(String),
    Hole(Hole),
}

/// One entry of a built node's child list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChildSource {
    /// Splice the captured node or node list.
    Hole(Hole),
    /// Run a nested procedure and append its node.
    Builder(BuilderId),
    /// Contributes nothing.
    Null,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderProc {
    pub id: BuilderId,
    pub node_type: Symbol,
    pub data: Option<DataSource>,
    pub children: Vec<ChildSource>,
    /// Whether this procedure or any nested one reads the capture set.
    pub needs_captures: bool,
}

/// Entry point of a rule's right side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultProgram {
    /// Delete the consumed nodes.
    Null,
    /// Return the capture verbatim.
    Hole(Hole),
    Subtree(BuilderId),
}

impl ResultProgram {
    pub fn is_hole(&self) -> bool {
        matches!(self, ResultProgram::Hole(_))
    }
}
