use indoc::indoc;

use crate::{DynamicTypeHierarchy, HierarchyError, TypeHierarchy, TypeKind};

fn expressions() -> DynamicTypeHierarchy {
    let mut h = DynamicTypeHierarchy::new();
    h.add_type("Expression", None, TypeKind::Abstract).unwrap();
    h.add_type("Addition", Some("Expression"), TypeKind::Ordinary)
        .unwrap();
    h.add_type("Literal", Some("Expression"), TypeKind::Abstract)
        .unwrap();
    h.add_type("Number", Some("Literal"), TypeKind::Literal)
        .unwrap();
    h.add_type("Statement", None, TypeKind::Ordinary).unwrap();
    h
}

#[test]
fn is_a_walks_parents() {
    let h = expressions();

    assert!(h.is_a("Number", "Number"));
    assert!(h.is_a("Number", "Literal"));
    assert!(h.is_a("Number", "Expression"));
    assert!(!h.is_a("Expression", "Number"));
    assert!(!h.is_a("Statement", "Expression"));
}

#[test]
fn descendants_include_self_in_declaration_order() {
    let h = expressions();

    assert_eq!(
        h.descendants("Expression"),
        vec!["Expression", "Addition", "Literal", "Number"]
    );
    assert_eq!(h.descendants("Statement"), vec!["Statement"]);
}

#[test]
fn abstract_kind_is_reported() {
    let h = expressions();

    assert!(h.is_abstract("Expression"));
    assert!(!h.is_abstract("Addition"));
    assert!(!h.is_abstract("Unknown"));
}

#[test]
fn add_type_rejects_unknown_parent() {
    let mut h = DynamicTypeHierarchy::new();
    let err = h
        .add_type("Addition", Some("Expression"), TypeKind::Ordinary)
        .unwrap_err();

    assert!(matches!(err, HierarchyError::UnknownParent { .. }));
}

#[test]
fn add_type_rejects_duplicates() {
    let mut h = DynamicTypeHierarchy::new();
    h.add_type("A", None, TypeKind::Ordinary).unwrap();
    let err = h.add_type("A", None, TypeKind::Ordinary).unwrap_err();

    assert_eq!(err.to_string(), "type `A` is declared more than once");
}

#[test]
fn from_json_resolves_forward_parents() {
    let json = indoc! {r#"
        [
          { "type": "Addition", "extends": "Expression" },
          { "type": "Expression", "kind": "abstract" },
          { "type": "Token", "kind": "literal" }
        ]
    "#};

    let h = DynamicTypeHierarchy::from_json(json).unwrap();

    assert_eq!(h.len(), 3);
    assert!(h.is_a("Addition", "Expression"));
    assert!(h.is_abstract("Expression"));
    assert_eq!(h.get("Token").unwrap().kind, TypeKind::Literal);
    assert_eq!(h.get("Addition").unwrap().kind, TypeKind::Ordinary);
}

#[test]
fn from_json_detects_cycles() {
    let json = r#"[
        { "type": "A", "extends": "B" },
        { "type": "B", "extends": "A" }
    ]"#;

    let err = DynamicTypeHierarchy::from_json(json).unwrap_err();
    assert!(matches!(err, HierarchyError::Cycle(_)));
}

#[test]
fn from_json_reports_unknown_parent() {
    let json = r#"[{ "type": "A", "extends": "Missing" }]"#;

    let err = DynamicTypeHierarchy::from_json(json).unwrap_err();
    assert_eq!(err.to_string(), "type `A` extends unknown type `Missing`");
}

#[test]
fn from_json_reports_malformed_input() {
    let err = DynamicTypeHierarchy::from_json("{").unwrap_err();
    assert!(matches!(err, HierarchyError::Json(_)));
}
