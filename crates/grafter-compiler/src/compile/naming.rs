//! Synthetic names for matchers and strategy checkers.

use indexmap::IndexMap;

/// Checker names, one per left-side item position.
pub const ORDINALS: [&str; 20] = [
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
];

/// Per-language counter handing out unique matcher names.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counters: IndexMap<String, usize>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{base}Matcher`, then `{base}Matcher2`, `{base}Matcher3`, ...
    pub fn matcher_name(&mut self, base: &str) -> String {
        let count = self.counters.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            format!("{base}Matcher")
        } else {
            format!("{base}Matcher{count}")
        }
    }
}
