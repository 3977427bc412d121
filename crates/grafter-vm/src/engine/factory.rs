//! Node construction interface used by builder procedures.

use indexmap::{IndexMap, IndexSet};

use super::tree::{Fragment, Node, TreeNode};

/// Creates builders for new nodes by type name.
pub trait NodeFactory {
    type Node: Node;
    type Builder<'f>: NodeBuilder<Node = Self::Node>
    where
        Self: 'f;

    /// `None` if the factory cannot build nodes of `node_type`.
    fn builder(&self, node_type: &str) -> Option<Self::Builder<'_>>;
}

/// In-progress node. Setters return `false` to reject a value.
pub trait NodeBuilder {
    type Node;

    fn set_data(&mut self, data: &str) -> bool;
    fn set_children(&mut self, children: Vec<Self::Node>) -> bool;
    fn is_valid(&self) -> bool;
    fn set_fragment(&mut self, fragment: Fragment);
    fn build(self) -> Self::Node;
}

/// Factory for [`TreeNode`]s with optional per-type constraints.
#[derive(Clone, Debug, Default)]
pub struct TreeFactory {
    rejected: IndexSet<String>,
    data_rules: IndexMap<String, fn(&str) -> bool>,
    child_counts: IndexMap<String, usize>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to build nodes of `node_type`.
    pub fn reject_type(mut self, node_type: impl Into<String>) -> Self {
        self.rejected.insert(node_type.into());
        self
    }

    /// Accept data for `node_type` only when `rule` holds.
    pub fn validate_data(mut self, node_type: impl Into<String>, rule: fn(&str) -> bool) -> Self {
        self.data_rules.insert(node_type.into(), rule);
        self
    }

    /// Nodes of `node_type` are valid only with exactly `count` children.
    pub fn require_children(mut self, node_type: impl Into<String>, count: usize) -> Self {
        self.child_counts.insert(node_type.into(), count);
        self
    }
}

impl NodeFactory for TreeFactory {
    type Node = TreeNode;
    type Builder<'f> = TreeBuilder<'f>;

    fn builder(&self, node_type: &str) -> Option<TreeBuilder<'_>> {
        if self.rejected.contains(node_type) {
            return None;
        }
        Some(TreeBuilder {
            factory: self,
            node: TreeNode::new(node_type, Vec::new()),
        })
    }
}

pub struct TreeBuilder<'f> {
    factory: &'f TreeFactory,
    node: TreeNode,
}

impl NodeBuilder for TreeBuilder<'_> {
    type Node = TreeNode;

    fn set_data(&mut self, data: &str) -> bool {
        if let Some(rule) = self.factory.data_rules.get(&self.node.node_type)
            && !rule(data)
        {
            return false;
        }
        self.node.data = Some(data.to_owned());
        true
    }

    fn set_children(&mut self, children: Vec<TreeNode>) -> bool {
        self.node.children = children;
        true
    }

    fn is_valid(&self) -> bool {
        self.factory
            .child_counts
            .get(&self.node.node_type)
            .is_none_or(|count| *count == self.node.children.len())
    }

    fn set_fragment(&mut self, fragment: Fragment) {
        self.node.fragment = Some(fragment);
    }

    fn build(self) -> TreeNode {
        self.node
    }
}
