use super::lexer::{SyntaxKind, lex, token_text, unescape};

fn kinds(source: &str) -> Vec<SyntaxKind> {
    lex(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn lex_rule_punctuation() {
    use SyntaxKind::*;

    assert_eq!(
        kinds("Call(#1...) -> null;"),
        vec![
            Id, ParenOpen, Hole, Ellipsis, ParenClose, Arrow, KwNull, Semicolon
        ]
    );
}

#[test]
fn lex_symbol_range() {
    use SyntaxKind::*;

    assert_eq!(
        kinds("'a'..'z'<#3>"),
        vec![CharLiteral, DotDot, CharLiteral, AngleOpen, Hole, AngleClose]
    );
}

#[test]
fn lex_keywords_and_identifiers() {
    use SyntaxKind::*;

    assert_eq!(
        kinds("language languages null nullable"),
        vec![KwLanguage, Id, KwNull, Id]
    );
}

#[test]
fn lex_comments_are_trivia() {
    let tokens = lex("A // trailing\n-> B;");
    let comment = tokens
        .iter()
        .find(|t| t.kind == SyntaxKind::LineComment)
        .unwrap();

    assert_eq!(token_text("A // trailing\n-> B;", comment), "// trailing");
    assert_eq!(kinds("A // trailing\n-> B;").len(), 4);
}

#[test]
fn lex_coalesces_garbage() {
    let source = "A $$$ B";
    let tokens: Vec<_> = lex(source)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, SyntaxKind::Garbage);
    assert_eq!(token_text(source, &tokens[1]), "$$$");
}

#[test]
fn lex_string_with_escaped_quote() {
    let source = r#"Str<"say \"hi\"">"#;
    let tokens = lex(source);

    assert_eq!(tokens[2].kind, SyntaxKind::StringLiteral);
    assert_eq!(token_text(source, &tokens[2]), r#""say \"hi\"""#);
}

#[test]
fn unescape_known_and_unknown_sequences() {
    assert_eq!(unescape(r#"a\"b\\c\n"#).unwrap(), "a\"b\\c\n");
    assert_eq!(unescape(r"\q").unwrap_err(), r"\q");
}
