//! Compilation settings.

const DEFAULT_PARSE_FUEL: u32 = 1_000_000;
const DEFAULT_PARSE_MAX_DEPTH: u32 = 4096;
const DEFAULT_CHILDREN_INLINE_LIMIT: usize = 4;
const DEFAULT_LANGUAGE: &str = "default";

/// Settings shared by every compilation stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileConfig {
    /// Parser operations allowed before `Error::ExecFuelExhausted`.
    pub parse_fuel: u32,
    /// Nesting depth allowed before `Error::RecursionLimitExceeded`.
    pub recursion_limit: u32,
    /// Child conjuncts kept inline in a matcher before they move to its
    /// children procedure.
    pub children_inline_limit: usize,
    /// Language of rules written outside a `language` block.
    pub default_language: String,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            parse_fuel: DEFAULT_PARSE_FUEL,
            recursion_limit: DEFAULT_PARSE_MAX_DEPTH,
            children_inline_limit: DEFAULT_CHILDREN_INLINE_LIMIT,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_fuel(mut self, fuel: u32) -> Self {
        self.parse_fuel = fuel;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn children_inline_limit(mut self, limit: usize) -> Self {
        self.children_inline_limit = limit;
        self
    }

    pub fn default_language(mut self, name: impl Into<String>) -> Self {
        self.default_language = name.into();
        self
    }
}
