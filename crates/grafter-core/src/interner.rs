//! Name table shared by every language of a compiled program.
//!
//! Type tests and builders refer to node type names and static data through
//! `Symbol` indices. The compiler fills one `Interner`; the runtime only
//! reads it, looking node types up with `get`.

use indexmap::IndexSet;

/// Index of a name in the program's `Interner`, assigned in first-use order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Interner {
    strings: IndexSet<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol for `s`, adding it on first use.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(sym) = self.get(s) {
            return sym;
        }
        let (index, _) = self.strings.insert_full(s.to_owned());
        Symbol(index as u32)
    }

    /// Symbol for `s` if the compiler ever saw it.
    ///
    /// A node type missing here is accepted by no type test.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.strings.get_index_of(s).map(|index| Symbol(index as u32))
    }

    /// # Panics
    /// Panics if `sym` came from another interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
