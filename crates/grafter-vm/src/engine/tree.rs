//! Tree abstraction the engine matches against.

use std::fmt;

/// Byte span of source text covered by a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub start: u32,
    pub end: u32,
}

impl Fragment {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Smallest fragment covering all of `fragments`; `None` when empty.
    pub fn cover(fragments: impl IntoIterator<Item = Fragment>) -> Option<Fragment> {
        fragments.into_iter().reduce(|acc, f| Fragment {
            start: acc.start.min(f.start),
            end: acc.end.max(f.end),
        })
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A node of the tree being rewritten.
///
/// Captures hold clones, so `Clone` should be cheap for large trees.
pub trait Node: Clone {
    fn node_type(&self) -> &str;
    fn data(&self) -> Option<&str>;
    fn children(&self) -> &[Self];
    fn fragment(&self) -> Option<Fragment>;
}

/// Owned in-memory tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub node_type: String,
    pub data: Option<String>,
    pub children: Vec<TreeNode>,
    pub fragment: Option<Fragment>,
}

impl TreeNode {
    pub fn new(node_type: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            node_type: node_type.into(),
            data: None,
            children,
            fragment: None,
        }
    }

    pub fn leaf(node_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::new(node_type, Vec::new())
        }
    }

    pub fn with_fragment(mut self, start: u32, end: u32) -> Self {
        self.fragment = Some(Fragment::new(start, end));
        self
    }
}

impl Node for TreeNode {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn fragment(&self) -> Option<Fragment> {
        self.fragment
    }
}

/// Compact s-expression form: `Type<"data">(child, ...)`.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node_type)?;
        if let Some(data) = &self.data {
            write!(f, "<{data:?}>")?;
        }
        if !self.children.is_empty() {
            f.write_str("(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{child}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
