//! Capture set filled by a match attempt.

use grafter_program::Hole;
use indexmap::IndexMap;

use super::tree::Node;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capture<N> {
    Node(N),
    Nodes(Vec<N>),
    Data(String),
}

impl<N> Capture<N> {
    /// Nodes to splice into a child list; `None` for data.
    pub fn as_nodes(&self) -> Option<&[N]> {
        match self {
            Capture::Node(node) => Some(std::slice::from_ref(node)),
            Capture::Nodes(nodes) => Some(nodes),
            Capture::Data(_) => None,
        }
    }
}

/// Hole-indexed captures, in binding order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted<N> {
    captures: IndexMap<Hole, Capture<N>>,
}

impl<N> Default for Extracted<N> {
    fn default() -> Self {
        Self {
            captures: IndexMap::new(),
        }
    }
}

impl<N: Node> Extracted<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hole: Hole) -> Option<&Capture<N>> {
        self.captures.get(&hole)
    }

    /// The single node bound to `hole`.
    pub fn node(&self, hole: Hole) -> Option<&N> {
        match self.captures.get(&hole)? {
            Capture::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Nodes bound to `hole`, a single node counting as one.
    pub fn nodes(&self, hole: Hole) -> Option<&[N]> {
        self.captures.get(&hole)?.as_nodes()
    }

    /// Data bound to `hole`: a data capture, or the data of a single
    /// captured node.
    pub fn data(&self, hole: Hole) -> Option<&str> {
        match self.captures.get(&hole)? {
            Capture::Data(data) => Some(data),
            Capture::Node(node) => node.data(),
            Capture::Nodes(nodes) => match nodes.as_slice() {
                [node] => node.data(),
                _ => None,
            },
        }
    }

    /// Number of bound holes.
    pub fn count(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ {
        self.captures.keys().copied()
    }

    /// Bind a single node. A list already under `hole` (from an earlier
    /// repeated item) takes the node as its next element instead.
    pub fn bind_node(&mut self, hole: Hole, node: N) {
        if self.holds_nodes(hole) {
            self.push_node(hole, node);
        } else {
            self.captures.insert(hole, Capture::Node(node));
        }
    }

    /// Bind a list, appending to nodes already under `hole`.
    pub fn bind_nodes(&mut self, hole: Hole, nodes: Vec<N>) {
        if self.holds_nodes(hole) {
            self.extend_nodes(hole, nodes);
        } else {
            self.captures.insert(hole, Capture::Nodes(nodes));
        }
    }

    pub fn bind_data(&mut self, hole: Hole, data: impl Into<String>) {
        self.captures.insert(hole, Capture::Data(data.into()));
    }

    /// Append to the list under `hole`. A single node already bound there
    /// becomes the first element of the list.
    pub fn push_node(&mut self, hole: Hole, node: N) {
        self.extend_nodes(hole, [node]);
    }

    fn holds_nodes(&self, hole: Hole) -> bool {
        matches!(
            self.captures.get(&hole),
            Some(Capture::Node(_) | Capture::Nodes(_))
        )
    }

    pub fn extend_nodes(&mut self, hole: Hole, nodes: impl IntoIterator<Item = N>) {
        let capture = self
            .captures
            .entry(hole)
            .or_insert_with(|| Capture::Nodes(Vec::new()));
        let mut list = match std::mem::replace(capture, Capture::Nodes(Vec::new())) {
            Capture::Node(first) => vec![first],
            Capture::Nodes(list) => list,
            Capture::Data(_) => Vec::new(),
        };
        list.extend(nodes);
        *capture = Capture::Nodes(list);
    }
}
