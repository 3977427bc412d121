//! Left-side pattern items.

use std::fmt::{self, Write as _};

use grafter_program::{Hole, MatchMode};
use rowan::TextRange;

/// Data position of a fixed node: captured or compared against a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataPattern {
    Hole(Hole),
    Static(String),
}

impl fmt::Display for DataPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataPattern::Hole(hole) => write!(f, "{hole}"),
            DataPattern::Static(s) => write!(f, "{s:?}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternKind {
    /// One node of `node_type` (is-a) with optional data and children.
    Fixed {
        node_type: String,
        data: Option<DataPattern>,
        children: Vec<PatternItem>,
    },
    /// One node of `node_type`, captured whole. With `ellipsis`, every
    /// remaining child of that type, captured as a list.
    TypedHole {
        node_type: String,
        hole: Hole,
        ellipsis: bool,
    },
    /// Any child, captured as a one-element list. With `ellipsis`, every
    /// remaining child.
    UntypedHole { hole: Hole, ellipsis: bool },
    /// A leaf whose data is one character in `first..=last`.
    SymbolRange {
        first: char,
        last: char,
        data: Option<Hole>,
    },
    Or(Vec<PatternItem>),
    And(Vec<PatternItem>),
    /// Uncaptured remaining children.
    Rest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternItem {
    pub kind: PatternKind,
    pub mode: MatchMode,
    pub negated: bool,
    pub range: TextRange,
}

impl PatternItem {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            mode: MatchMode::Normal,
            negated: false,
            range: TextRange::default(),
        }
    }

    pub fn fixed(
        node_type: impl Into<String>,
        data: Option<DataPattern>,
        children: Vec<PatternItem>,
    ) -> Self {
        Self::new(PatternKind::Fixed {
            node_type: node_type.into(),
            data,
            children,
        })
    }

    pub fn typed_hole(node_type: impl Into<String>, hole: u32) -> Self {
        Self::new(PatternKind::TypedHole {
            node_type: node_type.into(),
            hole: Hole(hole),
            ellipsis: false,
        })
    }

    pub fn untyped_hole(hole: u32) -> Self {
        Self::new(PatternKind::UntypedHole {
            hole: Hole(hole),
            ellipsis: false,
        })
    }

    pub fn symbol_range(first: char, last: char, data: Option<u32>) -> Self {
        Self::new(PatternKind::SymbolRange {
            first,
            last,
            data: data.map(Hole),
        })
    }

    pub fn or(items: Vec<PatternItem>) -> Self {
        Self::new(PatternKind::Or(items))
    }

    pub fn and(items: Vec<PatternItem>) -> Self {
        Self::new(PatternKind::And(items))
    }

    pub fn rest() -> Self {
        Self::new(PatternKind::Rest)
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    /// Ellipsis variants of holes, plus `...`.
    pub fn is_ellipsis(&self) -> bool {
        match &self.kind {
            PatternKind::TypedHole { ellipsis, .. } | PatternKind::UntypedHole { ellipsis, .. } => {
                *ellipsis
            }
            PatternKind::Rest => true,
            _ => false,
        }
    }

    /// Type name written in the item, if any.
    pub fn node_type(&self) -> Option<&str> {
        match &self.kind {
            PatternKind::Fixed { node_type, .. } | PatternKind::TypedHole { node_type, .. } => {
                Some(node_type)
            }
            _ => None,
        }
    }

    /// Deduplication key: the canonical text without the top-level mode.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.write_body(&mut out)
            .expect("String write never fails");
        out
    }

    fn write_body(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if self.negated {
            f.write_char('!')?;
        }
        match &self.kind {
            PatternKind::Fixed {
                node_type,
                data,
                children,
            } => {
                f.write_str(node_type)?;
                if let Some(data) = data {
                    write!(f, "<{data}>")?;
                }
                if !children.is_empty() {
                    write!(f, "({})", ItemList(children))?;
                }
                Ok(())
            }
            PatternKind::TypedHole {
                node_type,
                hole,
                ellipsis,
            } => {
                write!(f, "{node_type}{hole}")?;
                if *ellipsis {
                    f.write_str("...")?;
                }
                Ok(())
            }
            PatternKind::UntypedHole { hole, ellipsis } => {
                write!(f, "{hole}")?;
                if *ellipsis {
                    f.write_str("...")?;
                }
                Ok(())
            }
            PatternKind::SymbolRange { first, last, data } => {
                write!(f, "{first:?}..{last:?}")?;
                if let Some(hole) = data {
                    write!(f, "<{hole}>")?;
                }
                Ok(())
            }
            PatternKind::Or(items) => write!(f, "|({})", ItemList(items)),
            PatternKind::And(items) => write!(f, "&({})", ItemList(items)),
            PatternKind::Rest => f.write_str("..."),
        }
    }
}

impl fmt::Display for PatternItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            MatchMode::Normal => self.write_body(f),
            MatchMode::Optional => {
                f.write_char('[')?;
                self.write_body(f)?;
                f.write_char(']')
            }
            MatchMode::Repeated => {
                f.write_char('{')?;
                self.write_body(f)?;
                f.write_char('}')
            }
        }
    }
}

struct ItemList<'a>(&'a [PatternItem]);

impl fmt::Display for ItemList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
