use grafter_program::{BuilderId, ChildSource, DataSource, Hole, ResultProgram};

use crate::test_utils::{compile_rules, default_language};

#[test]
fn nested_subtrees_compile_before_their_parent() {
    let program = compile_rules(r#"A#1 -> Outer(Inner<"x">, Wrap(#1), null);"#);
    let language = default_language(&program);
    let resolve = |id: u32| program.strings().resolve(language.builder(BuilderId(id)).node_type);

    assert_eq!(language.builders.len(), 3);
    assert_eq!([resolve(0), resolve(1), resolve(2)], ["Inner", "Wrap", "Outer"]);
    assert_eq!(language.rules[0].result, ResultProgram::Subtree(BuilderId(2)));

    let inner = language.builder(BuilderId(0));
    assert_eq!(inner.data, Some(DataSource::Static("x".to_string())));
    assert!(!inner.needs_captures);

    let outer = language.builder(BuilderId(2));
    assert_eq!(
        outer.children,
        vec![
            ChildSource::Builder(BuilderId(0)),
            ChildSource::Builder(BuilderId(1)),
            ChildSource::Null,
        ]
    );
    assert!(outer.needs_captures);
}

#[test]
fn capture_use_propagates_to_ancestors() {
    let program = compile_rules("A#1 -> Outer(Mid(Inner(#1)));");
    let language = default_language(&program);

    assert!(language.builders.iter().all(|b| b.needs_captures));
}

#[test]
fn static_subtree_needs_no_captures() {
    let program = compile_rules(r#"A -> B<"k">;"#);
    let language = default_language(&program);

    assert!(!language.builder(BuilderId(0)).needs_captures);
    assert!(language.rules[0].needs_fragment);
}

#[test]
fn data_hole_feeds_node_data() {
    let program = compile_rules("Identifier<#1> -> Name<#1>;");
    let name = default_language(&program).builder(BuilderId(0));

    assert_eq!(name.data, Some(DataSource::Hole(Hole(1))));
    assert!(name.needs_captures);
}

#[test]
fn hole_and_null_results_have_no_builder() {
    let program = compile_rules(indoc::indoc! {"
        A#1 -> #1;
        B -> null;
    "});
    let language = default_language(&program);

    assert!(language.builders.is_empty());
    assert_eq!(language.rules[0].result, ResultProgram::Hole(Hole(1)));
    assert!(!language.rules[0].needs_fragment);
    assert_eq!(language.rules[1].result, ResultProgram::Null);
    assert!(language.rules[1].needs_fragment);
}
