use grafter_program::{Condition, Extraction, Hole, MatcherId, TypeTest};

use crate::config::CompileConfig;
use crate::test_utils::{compile_rules, compile_rules_with, default_language, expressions};

#[test]
fn identical_sub_patterns_share_one_matcher() {
    let program = compile_rules(indoc::indoc! {r#"
        Identifier<#1> -> Name<#1>;
        Call(Identifier<#1>) -> #1;
    "#});
    let language = default_language(&program);

    assert_eq!(language.matchers.len(), 2);
    assert_eq!(language.rules[0].strategy.checkers()[0].matcher, MatcherId(0));

    let call = language.matcher_by_key("Call(Identifier<#1>)").unwrap();
    assert_eq!(
        call.conditions[2],
        Condition::Child {
            index: 0,
            matcher: MatcherId(0)
        }
    );
    assert_eq!(
        call.extractions,
        vec![Extraction::Nested {
            index: 0,
            matcher: MatcherId(0)
        }]
    );
}

#[test]
fn matcher_names_are_unique_per_base() {
    let program = compile_rules(indoc::indoc! {r#"
        Identifier<"x"> -> null;
        Identifier<"y"> -> null;
        !Identifier -> null;
        Identifier<"x"> -> null;
    "#});
    let names: Vec<&str> = default_language(&program)
        .matchers
        .iter()
        .map(|m| m.name.as_str())
        .collect();

    assert_eq!(
        names,
        vec!["IdentifierMatcher", "IdentifierMatcher2", "NotIdentifierMatcher"]
    );
}

#[test]
fn many_children_move_to_children_procedure() {
    let program = compile_rules("Call(A, B, C, D, E) -> null;");
    let call = default_language(&program).matcher(MatcherId(5));

    assert_eq!(call.conditions.len(), 3);
    assert_eq!(call.conditions[1], Condition::ChildCount(5));
    assert_eq!(call.conditions[2], Condition::MatchesChildren);
    assert_eq!(call.children_procedure.len(), 5);
    assert_eq!(
        call.children_procedure[4],
        Condition::Child {
            index: 4,
            matcher: MatcherId(4)
        }
    );
}

#[test]
fn children_stay_inline_up_to_the_limit() {
    let program = compile_rules("Call(A, B, C, D) -> null;");
    let call = default_language(&program).matcher(MatcherId(4));

    assert_eq!(call.conditions.len(), 6);
    assert!(call.children_procedure.is_empty());

    let config = CompileConfig::new().children_inline_limit(1);
    let program = compile_rules_with("Call(A, B) -> null;", None, &config);
    let call = default_language(&program).matcher(MatcherId(2));

    assert_eq!(call.conditions.last(), Some(&Condition::MatchesChildren));
    assert_eq!(call.children_procedure.len(), 2);
}

#[test]
fn type_tests_resolve_descendants() {
    let hierarchy = expressions();
    let program = compile_rules_with(
        "Expression#1 -> #1;",
        Some(&hierarchy),
        &CompileConfig::default(),
    );
    let unit = default_language(&program).matcher(MatcherId(0));

    let Condition::Type(test) = &unit.conditions[0] else {
        panic!("expected a type test, got {:?}", unit.conditions[0]);
    };
    let accepts: Vec<&str> = test
        .accepts
        .iter()
        .map(|s| program.strings().resolve(*s))
        .collect();
    assert_eq!(accepts, vec!["Expression", "Addition", "Identifier", "Number"]);
}

#[test]
fn type_tests_are_exact_without_hierarchy() {
    let program = compile_rules("Expression#1 -> #1;");
    let unit = default_language(&program).matcher(MatcherId(0));
    let expression = program.strings().get("Expression").unwrap();

    assert_eq!(unit.conditions, vec![Condition::Type(TypeTest::exact(expression))]);
    assert_eq!(unit.extractions, vec![Extraction::Node(Hole(1))]);
}

#[test]
fn ellipsis_child_sets_minimum_count() {
    let program = compile_rules(r#"Call(Identifier<"print">, #2...) -> Print(#2);"#);
    let language = default_language(&program);

    let print = language.matcher(MatcherId(0));
    assert_eq!(
        print.conditions[1..],
        [
            Condition::ChildCount(0),
            Condition::DataEquals("print".to_string())
        ]
    );
    assert!(!print.extracts());

    let call = language.matcher(MatcherId(1));
    assert_eq!(call.conditions[1], Condition::MinChildCount(1));
    assert_eq!(
        call.extractions,
        vec![Extraction::Remaining {
            hole: Hole(2),
            start: 1
        }]
    );
}

#[test]
fn typed_ellipsis_tests_remaining_children() {
    let program = compile_rules("Block(Statement#1...) -> StatementList(#1);");
    let language = default_language(&program);
    let statement = program.strings().get("Statement").unwrap();

    assert_eq!(language.matchers.len(), 1);
    let block = language.matcher(MatcherId(0));
    assert_eq!(block.conditions[1], Condition::MinChildCount(0));
    assert_eq!(
        block.conditions[2],
        Condition::RemainingChildren {
            start: 0,
            types: TypeTest::exact(statement)
        }
    );
}

#[test]
fn untyped_child_holes_capture_by_index() {
    let program = compile_rules("Pair(#1, #2) -> Swap(#2, #1);");
    let pair = default_language(&program).matcher(MatcherId(0));

    assert_eq!(pair.conditions.len(), 2);
    assert_eq!(
        pair.extractions,
        vec![
            Extraction::Child {
                hole: Hole(1),
                index: 0
            },
            Extraction::Child {
                hole: Hole(2),
                index: 1
            },
        ]
    );
}

#[test]
fn typed_child_holes_capture_by_index() {
    let program = compile_rules("Call(Identifier#1) -> Invoke(#1);");
    let language = default_language(&program);
    let call = language.matcher(MatcherId(1));

    assert_eq!(language.matcher(MatcherId(0)).key, "Identifier#1");
    assert_eq!(
        call.conditions[2],
        Condition::Child {
            index: 0,
            matcher: MatcherId(0)
        }
    );
    assert_eq!(
        call.extractions,
        vec![Extraction::Child {
            hole: Hole(1),
            index: 0
        }]
    );
}

#[test]
fn or_extracts_first_matching_alternative() {
    let program = compile_rules("|(Identifier#1, Number#1) -> #1;");
    let or = default_language(&program).matcher(MatcherId(2));

    assert_eq!(or.name, "OrMatcher");
    assert_eq!(
        or.conditions,
        vec![Condition::AnyOf(vec![MatcherId(0), MatcherId(1)])]
    );
    assert_eq!(
        or.extractions,
        vec![Extraction::FirstOf(vec![MatcherId(0), MatcherId(1)])]
    );
}

#[test]
fn and_extracts_every_capturing_item() {
    let program = compile_rules("&(Expression#1, !Number) -> #1;");
    let language = default_language(&program);

    assert!(language.matcher(MatcherId(1)).negated);
    let and = language.matcher(MatcherId(2));
    assert_eq!(
        and.conditions,
        vec![Condition::AllOf(vec![MatcherId(0), MatcherId(1)])]
    );
    assert_eq!(and.extractions, vec![Extraction::Each(vec![MatcherId(0)])]);
}

#[test]
fn negated_typed_hole_still_binds() {
    let program = compile_rules("!Number#1 -> Wrap(#1);");
    let unit = default_language(&program).matcher(MatcherId(0));

    assert!(unit.negated);
    assert_eq!(unit.name, "NotNumberMatcher");
    assert_eq!(unit.key, "!Number#1");
    assert_eq!(unit.extractions, vec![Extraction::Node(Hole(1))]);
}

#[test]
fn symbol_range_captures_data() {
    let program = compile_rules("'a'..'z'<#1> -> Letter<#1>;");
    let unit = default_language(&program).matcher(MatcherId(0));

    assert_eq!(unit.name, "SymbolMatcher");
    assert_eq!(
        unit.conditions,
        vec![Condition::CharRange {
            first: 'a',
            last: 'z'
        }]
    );
    assert_eq!(unit.extractions, vec![Extraction::Data(Hole(1))]);
}

#[test]
fn dependencies_precede_dependents() {
    let program = compile_rules(indoc::indoc! {r#"
        Call(Identifier<"f">, |(Number#1, Call(#1, ...))) -> #1;
        &(Call(A, B, C, D, E), !Call) -> null;
    "#});

    for unit in &default_language(&program).matchers {
        for dep in unit.dependencies() {
            assert!(dep < unit.id, "{} references {dep}", unit.id);
        }
    }
}
