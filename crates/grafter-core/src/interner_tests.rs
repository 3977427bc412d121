use crate::{Interner, Symbol};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("Identifier");
    let b = interner.intern("Identifier");
    let c = interner.intern("Call");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let sym = interner.intern("Statement");
    assert_eq!(interner.resolve(sym), "Statement");
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    let sym = interner.intern("Name");

    assert_eq!(interner.get("Name"), Some(sym));
    assert_eq!(interner.get("Other"), None);
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbols_follow_first_use_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");
    interner.intern("z");

    assert_eq!(z, Symbol::from_raw(0));
    assert_eq!(a.as_u32(), 1);
    assert_eq!(interner.len(), 2);
}

#[test]
#[should_panic]
fn resolve_rejects_foreign_symbol() {
    let interner = Interner::new();
    interner.resolve(Symbol::from_raw(3));
}
