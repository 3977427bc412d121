use crate::diagnostics::DiagnosticKind;
use crate::test_utils::{analysis_errors, analyze_with};

#[test]
fn well_formed_rules_pass() {
    let source = r#"
        Call(Identifier<"print">, #2...) -> Print(#2);
        A, [B], {C#1} -> List(#1);
        [!A], !Expression#2 -> #2;
        Pair(#1, #2) -> Pair(#2, #1);
        Digits('0'..'9'<#1>) -> Number<#1>;
        &(Call(...), !Call(Identifier<"exit">)) -> null;
    "#;

    assert_eq!(analysis_errors(source), vec![]);
}

#[test]
fn modes_only_at_top_level() {
    assert_eq!(
        analysis_errors("A([B]) -> C;"),
        vec![DiagnosticKind::ModeNotAllowed]
    );
    assert_eq!(
        analysis_errors("|({A}, B) -> C;"),
        vec![DiagnosticKind::ModeNotAllowed]
    );
    assert_eq!(
        analysis_errors("[|(A, B)] -> C;"),
        vec![DiagnosticKind::ModeNotAllowed]
    );
    assert_eq!(
        analysis_errors("{&(A, B)} -> C;"),
        vec![DiagnosticKind::ModeNotAllowed]
    );
}

#[test]
fn symbol_range_must_be_ordered() {
    assert_eq!(
        analysis_errors("'z'..'a' -> C;"),
        vec![DiagnosticKind::InvalidSymbolRange]
    );
    assert_eq!(analysis_errors("'a'..'a' -> C;"), vec![]);
}

#[test]
fn untyped_hole_cannot_be_a_node() {
    assert_eq!(
        analysis_errors("#1 -> #1;"),
        vec![DiagnosticKind::UntypedHoleAsNode]
    );
    assert_eq!(
        analysis_errors("|(A, #1) -> #1;"),
        vec![DiagnosticKind::UntypedHoleAsNode]
    );
    assert_eq!(analysis_errors("A(B, #1) -> #1;"), vec![]);
    assert_eq!(analysis_errors("Foo#1 -> #1;"), vec![]);
}

#[test]
fn combinators_need_items() {
    assert_eq!(
        analysis_errors("|() -> C;"),
        vec![DiagnosticKind::EmptyCombinator]
    );
    assert_eq!(
        analysis_errors("A(&()) -> C;"),
        vec![DiagnosticKind::EmptyCombinator]
    );
}

#[test]
fn negation_targets() {
    assert_eq!(
        analysis_errors("!&(A, B) -> C;"),
        vec![DiagnosticKind::NegationNotAllowed]
    );
    assert_eq!(
        analysis_errors("!'a'..'z' -> C;"),
        vec![DiagnosticKind::NegationNotAllowed]
    );
    assert_eq!(
        analysis_errors("A(!#1) -> C;"),
        vec![DiagnosticKind::NegationNotAllowed]
    );
}

#[test]
fn holes_under_negation_are_rejected() {
    assert_eq!(
        analysis_errors("!A(B#1) -> C;"),
        vec![DiagnosticKind::HoleUnderNegation]
    );
    assert_eq!(
        analysis_errors("!A<#1> -> C;"),
        vec![DiagnosticKind::HoleUnderNegation]
    );
    assert_eq!(
        analysis_errors("!|(A, B#1) -> C;"),
        vec![DiagnosticKind::HoleUnderNegation]
    );
    assert_eq!(
        analysis_errors("!A(#1) -> C;"),
        vec![DiagnosticKind::HoleUnderNegation]
    );
}

#[test]
fn ellipsis_only_as_last_child() {
    assert_eq!(
        analysis_errors("A(#1..., B) -> C;"),
        vec![DiagnosticKind::MisplacedEllipsis]
    );
    assert_eq!(
        analysis_errors("A(..., B) -> C;"),
        vec![DiagnosticKind::MisplacedEllipsis]
    );
    assert_eq!(
        analysis_errors("Foo#1... -> C;"),
        vec![DiagnosticKind::MisplacedEllipsis]
    );
    assert_eq!(
        analysis_errors("... -> C;"),
        vec![DiagnosticKind::MisplacedEllipsis]
    );
    assert_eq!(analysis_errors("A(B, Foo#1...) -> C(#1);"), vec![]);
}

#[test]
fn data_holes_cannot_repeat() {
    assert_eq!(
        analysis_errors("{Identifier<#1>} -> C;"),
        vec![DiagnosticKind::DataHoleInRepeated]
    );
    assert_eq!(
        analysis_errors("{Word('a'..'z'<#1>)} -> C;"),
        vec![DiagnosticKind::DataHoleInRepeated]
    );
    assert_eq!(analysis_errors("{Call(#1)} -> C(#1);"), vec![]);
}

#[test]
fn diagnostic_names_fragment_and_rule() {
    let source = "A([B]) -> C;";
    let diagnostics = analyze_with(source, None);
    let message = diagnostics.iter().next().unwrap();

    assert_eq!(
        message.message(),
        "only top-level items can be optional or repeated: `[B]`"
    );
    assert_eq!(u32::from(message.range().start()), 2);
    assert_eq!(u32::from(message.range().end()), 5);
    assert_eq!(message.related()[0].message(), "in rule `A([B]) -> C;`");
}
