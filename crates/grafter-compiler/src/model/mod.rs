//! Pattern & hole model: the pre-validated form of rule statements.
//!
//! Values are produced by the parser or constructed directly. Every item
//! renders its canonical text through `Display`.

mod pattern;
mod resulting;


use std::fmt;

use rowan::TextRange;

pub use pattern::{DataPattern, PatternItem, PatternKind};
pub use resulting::{ResultingItem, ResultingKind};

/// One rule statement: `items -> result;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Vec<PatternItem>,
    pub result: ResultingItem,
    pub range: TextRange,
}

impl Rule {
    pub fn new(pattern: Vec<PatternItem>, result: ResultingItem) -> Self {
        Self {
            pattern,
            result,
            range: TextRange::default(),
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.pattern.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, " -> {};", self.result)
    }
}

/// Rules of one language, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageBlock {
    pub name: String,
    /// Range of the name; `None` for rules outside any `language` block.
    pub name_range: Option<TextRange>,
    pub rules: Vec<Rule>,
}

impl LanguageBlock {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            name_range: None,
            rules,
        }
    }
}

/// A whole rule source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleFile {
    pub blocks: Vec<LanguageBlock>,
}

impl RuleFile {
    pub fn new(blocks: Vec<LanguageBlock>) -> Self {
        Self { blocks }
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.blocks.iter().flat_map(|b| &b.rules)
    }

    pub fn rule_count(&self) -> usize {
        self.blocks.iter().map(|b| b.rules.len()).sum()
    }
}
