//! Per-language compilation state.

use grafter_core::{Interner, Symbol, TypeHierarchy};
use grafter_program::{
    BuilderId, BuilderProc, ChildSource, Condition, DataSource, Extraction, LanguageProgram,
    MatcherId, MatcherUnit, RuleId, RuleProgram, TypeTest,
};
use indexmap::IndexMap;

use super::naming::NameAllocator;
use crate::config::CompileConfig;

/// Everything one language's rules share while they compile.
///
/// The deduplication registry is insert-only: a canonical pattern text,
/// once registered, always resolves to the same matcher.
pub struct CompileSession<'a> {
    language: String,
    strings: &'a mut Interner,
    hierarchy: Option<&'a dyn TypeHierarchy>,
    config: &'a CompileConfig,
    matchers: Vec<MatcherUnit>,
    by_key: IndexMap<String, MatcherId>,
    builders: Vec<BuilderProc>,
    rules: Vec<RuleProgram>,
    names: NameAllocator,
}

/// Compiled body of a matcher unit, before it gets an id and a name.
#[derive(Debug, Default)]
pub struct UnitParts {
    pub conditions: Vec<Condition>,
    pub children_procedure: Vec<Condition>,
    pub extractions: Vec<Extraction>,
}

impl<'a> CompileSession<'a> {
    pub fn new(
        language: impl Into<String>,
        strings: &'a mut Interner,
        hierarchy: Option<&'a dyn TypeHierarchy>,
        config: &'a CompileConfig,
    ) -> Self {
        Self {
            language: language.into(),
            strings,
            hierarchy,
            config,
            matchers: Vec::new(),
            by_key: IndexMap::new(),
            builders: Vec::new(),
            rules: Vec::new(),
            names: NameAllocator::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn config(&self) -> &CompileConfig {
        self.config
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.strings.intern(name)
    }

    /// Membership test for `name`: every type that is-a `name`.
    ///
    /// Without a hierarchy, or for a name it does not know, the type is its
    /// own sole member.
    pub fn type_test(&mut self, name: &str) -> TypeTest {
        let symbol = self.strings.intern(name);
        let Some(hierarchy) = self.hierarchy.filter(|h| h.contains(name)) else {
            return TypeTest::exact(symbol);
        };
        let accepts = hierarchy
            .descendants(name)
            .into_iter()
            .map(|descendant| self.strings.intern(descendant))
            .collect();
        TypeTest {
            name: symbol,
            accepts,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<MatcherId> {
        self.by_key.get(key).copied()
    }

    /// # Panics
    /// Panics if `id` was not issued by this session.
    pub fn matcher(&self, id: MatcherId) -> &MatcherUnit {
        &self.matchers[id.index()]
    }

    pub fn matchers(&self) -> &[MatcherUnit] {
        &self.matchers
    }

    pub fn insert_matcher(
        &mut self,
        key: String,
        base: &str,
        negated: bool,
        parts: UnitParts,
    ) -> MatcherId {
        let id = MatcherId(self.matchers.len() as u32);
        let name = self.names.matcher_name(base);
        self.by_key.insert(key.clone(), id);
        self.matchers.push(MatcherUnit {
            id,
            name,
            key,
            negated,
            conditions: parts.conditions,
            children_procedure: parts.children_procedure,
            extractions: parts.extractions,
        });
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this session.
    pub fn builder(&self, id: BuilderId) -> &BuilderProc {
        &self.builders[id.index()]
    }

    pub fn insert_builder(
        &mut self,
        node_type: Symbol,
        data: Option<DataSource>,
        children: Vec<ChildSource>,
        needs_captures: bool,
    ) -> BuilderId {
        let id = BuilderId(self.builders.len() as u32);
        self.builders.push(BuilderProc {
            id,
            node_type,
            data,
            children,
            needs_captures,
        });
        id
    }

    pub fn next_rule_id(&self) -> RuleId {
        RuleId(self.rules.len() as u32)
    }

    pub fn push_rule(&mut self, rule: RuleProgram) {
        self.rules.push(rule);
    }

    pub fn finish(self) -> LanguageProgram {
        LanguageProgram {
            name: self.language,
            matchers: self.matchers,
            builders: self.builders,
            rules: self.rules,
        }
    }
}
