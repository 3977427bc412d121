//! Per-language rule programs and the aggregated lookup structure.

use grafter_core::Interner;
use indexmap::IndexMap;

use crate::builder::BuilderProc;
use crate::ids::{BuilderId, MatcherId, RuleId};
use crate::matcher::MatcherUnit;
use crate::rule::RuleProgram;

/// Everything compiled for one language.
#[derive(Clone, Debug, Default)]
pub struct LanguageProgram {
    pub name: String,
    /// Deduplicated matchers; a unit only references lower ids.
    pub matchers: Vec<MatcherUnit>,
    pub builders: Vec<BuilderProc>,
    /// Rules in declaration order.
    pub rules: Vec<RuleProgram>,
}

impl LanguageProgram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// # Panics
    /// Panics if the id does not belong to this language.
    #[inline]
    pub fn matcher(&self, id: MatcherId) -> &MatcherUnit {
        &self.matchers[id.index()]
    }

    /// # Panics
    /// Panics if the id does not belong to this language.
    #[inline]
    pub fn builder(&self, id: BuilderId) -> &BuilderProc {
        &self.builders[id.index()]
    }

    pub fn rule(&self, id: RuleId) -> Option<&RuleProgram> {
        self.rules.get(id.index())
    }

    /// Find the shared matcher for a canonical pattern text.
    pub fn matcher_by_key(&self, key: &str) -> Option<&MatcherUnit> {
        self.matchers.iter().find(|m| m.key == key)
    }
}

/// Compiled rules for every language of a rule source.
#[derive(Clone, Debug, Default)]
pub struct Program {
    strings: Interner,
    languages: IndexMap<String, LanguageProgram>,
}

impl Program {
    pub fn new(strings: Interner, languages: IndexMap<String, LanguageProgram>) -> Self {
        Self { strings, languages }
    }

    /// Interned type names referenced by matchers and builders.
    pub fn strings(&self) -> &Interner {
        &self.strings
    }

    pub fn language(&self, name: &str) -> Option<&LanguageProgram> {
        self.languages.get(name)
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageProgram> {
        self.languages.values()
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn rule_count(&self) -> usize {
        self.languages.values().map(|l| l.rules.len()).sum()
    }
}
