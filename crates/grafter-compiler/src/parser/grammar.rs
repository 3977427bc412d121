//! Recursive-descent grammar for rule sources.
//!
//! ```text
//! file     := (language | rule)*
//! language := 'language' Id '{' rule* '}'
//! rule     := item (',' item)* '->' result ';'
//! item     := '[' item ']' | '{' item '}' | '!'? atom
//! result   := 'null' | Hole | Id ('<' data '>')? ('(' results? ')')?
//! ```

use std::ops::Range;

use grafter_program::{Hole, MatchMode};
use rowan::TextRange;

use super::core::Parser;
use super::lexer::{SyntaxKind, unescape};
use crate::diagnostics::DiagnosticKind;
use crate::model::{
    DataPattern, LanguageBlock, PatternItem, PatternKind, ResultingItem, ResultingKind, Rule,
    RuleFile,
};

fn starts_item(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::BracketOpen
            | SyntaxKind::BraceOpen
            | SyntaxKind::Negation
            | SyntaxKind::Id
            | SyntaxKind::Hole
            | SyntaxKind::CharLiteral
            | SyntaxKind::Pipe
            | SyntaxKind::Ampersand
            | SyntaxKind::Ellipsis
    )
}

impl<'src> Parser<'src> {
    fn slice(&self, range: TextRange) -> &'src str {
        &self.source[Range::<usize>::from(range)]
    }

    fn error_unexpected(&mut self) {
        let text = self.current_text();
        self.error_msg(DiagnosticKind::UnexpectedToken, format!("`{text}`"));
    }

    pub(super) fn parse_file(&mut self) -> RuleFile {
        let mut blocks: Vec<LanguageBlock> = Vec::new();

        while !self.should_stop() {
            let kind = self.current();
            if kind == SyntaxKind::KwLanguage {
                if let Some(block) = self.parse_language() {
                    blocks.push(block);
                }
            } else if starts_item(kind) {
                let Some(rule) = self.parse_rule() else {
                    continue;
                };
                match blocks.last_mut() {
                    Some(block) if block.name_range.is_none() => block.rules.push(rule),
                    _ => blocks.push(LanguageBlock::new(self.default_language.clone(), vec![rule])),
                }
            } else {
                self.error_unexpected();
                self.bump();
            }
        }

        RuleFile::new(blocks)
    }

    fn parse_language(&mut self) -> Option<LanguageBlock> {
        self.bump();

        let name_range = self.eat_token(SyntaxKind::Id);
        if name_range.is_none() {
            self.error(DiagnosticKind::ExpectedLanguageName);
        }

        let Some(open) = self.eat_token(SyntaxKind::BraceOpen) else {
            self.error(DiagnosticKind::ExpectedOpenBrace);
            return None;
        };

        let mut rules = Vec::new();
        loop {
            if self.should_stop() {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedBrace,
                    "language block starts here",
                    open,
                );
                break;
            }
            if self.eat_token(SyntaxKind::BraceClose).is_some() {
                break;
            }
            if starts_item(self.current()) {
                if let Some(rule) = self.parse_rule() {
                    rules.push(rule);
                }
            } else {
                self.error_unexpected();
                self.bump();
            }
        }

        let name_range = name_range?;
        Some(LanguageBlock {
            name: self.slice(name_range).to_string(),
            name_range: Some(name_range),
            rules,
        })
    }

    fn parse_rule(&mut self) -> Option<Rule> {
        let start = self.current_span().start();
        let rule = self.parse_rule_body();
        match rule {
            Some((pattern, result)) => Some(Rule {
                pattern,
                result,
                range: TextRange::new(start, self.last_end()),
            }),
            None => {
                self.recover_statement();
                None
            }
        }
    }

    fn parse_rule_body(&mut self) -> Option<(Vec<PatternItem>, ResultingItem)> {
        let mut pattern = vec![self.parse_item()?];
        while self.eat_token(SyntaxKind::Comma).is_some() {
            pattern.push(self.parse_item()?);
        }
        if !self.expect(SyntaxKind::Arrow, DiagnosticKind::ExpectedArrow) {
            return None;
        }
        let result = self.parse_result()?;
        if !self.expect(SyntaxKind::Semicolon, DiagnosticKind::ExpectedSemicolon) {
            return None;
        }
        Some((pattern, result))
    }

    fn parse_item(&mut self) -> Option<PatternItem> {
        if !self.enter_recursion() {
            return None;
        }
        let item = self.parse_item_inner();
        self.exit_recursion();
        item
    }

    fn parse_item_inner(&mut self) -> Option<PatternItem> {
        match self.current() {
            SyntaxKind::BracketOpen => self.parse_moded(
                MatchMode::Optional,
                SyntaxKind::BracketClose,
                DiagnosticKind::UnclosedBracket,
            ),
            SyntaxKind::BraceOpen => self.parse_moded(
                MatchMode::Repeated,
                SyntaxKind::BraceClose,
                DiagnosticKind::UnclosedBrace,
            ),
            SyntaxKind::Negation => {
                let start = self.bump().start();
                let mut item = self.parse_atom()?;
                item.negated = true;
                item.range = TextRange::new(start, item.range.end());
                Some(item)
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_moded(
        &mut self,
        mode: MatchMode,
        close: SyntaxKind,
        unclosed: DiagnosticKind,
    ) -> Option<PatternItem> {
        let open = self.bump();
        let mut item = self.parse_item()?;
        if item.mode != MatchMode::Normal {
            self.error_at(DiagnosticKind::NestedMode, item.range, &item.to_string());
        }
        if self.eat_token(close).is_none() {
            self.error_unclosed_delimiter(unclosed, "opened here", open);
            return None;
        }
        item.mode = mode;
        item.range = TextRange::new(open.start(), self.last_end());
        Some(item)
    }

    fn parse_atom(&mut self) -> Option<PatternItem> {
        let start = self.current_span().start();
        let kind = match self.current() {
            SyntaxKind::Id => self.parse_named_atom()?,
            SyntaxKind::Hole => {
                let hole = self.parse_hole()?;
                let ellipsis = self.eat_token(SyntaxKind::Ellipsis).is_some();
                PatternKind::UntypedHole { hole, ellipsis }
            }
            SyntaxKind::CharLiteral => self.parse_symbol_range()?,
            SyntaxKind::Pipe => PatternKind::Or(self.parse_combinator()?),
            SyntaxKind::Ampersand => PatternKind::And(self.parse_combinator()?),
            SyntaxKind::Ellipsis => {
                self.bump();
                PatternKind::Rest
            }
            _ => {
                self.error(DiagnosticKind::ExpectedPattern);
                return None;
            }
        };
        Some(PatternItem::new(kind).with_range(TextRange::new(start, self.last_end())))
    }

    fn parse_named_atom(&mut self) -> Option<PatternKind> {
        let name_range = self.bump();
        let node_type = self.slice(name_range).to_string();

        if self.currently_is(SyntaxKind::Hole) {
            let hole = self.parse_hole()?;
            let ellipsis = self.eat_token(SyntaxKind::Ellipsis).is_some();
            return Some(PatternKind::TypedHole {
                node_type,
                hole,
                ellipsis,
            });
        }

        let data = if self.currently_is(SyntaxKind::AngleOpen) {
            Some(self.parse_data_block()?)
        } else {
            None
        };
        let children = if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_list(Self::parse_item)?
        } else {
            Vec::new()
        };

        Some(PatternKind::Fixed {
            node_type,
            data,
            children,
        })
    }

    fn parse_symbol_range(&mut self) -> Option<PatternKind> {
        let first = self.parse_char()?;
        if !self.expect(SyntaxKind::DotDot, DiagnosticKind::ExpectedRangeDots) {
            return None;
        }
        let last = self.parse_char()?;

        let data = match self.eat_token(SyntaxKind::AngleOpen) {
            Some(open) => {
                if !self.currently_is(SyntaxKind::Hole) {
                    self.error(DiagnosticKind::ExpectedHole);
                    return None;
                }
                let hole = self.parse_hole()?;
                if self.eat_token(SyntaxKind::AngleClose).is_none() {
                    self.error_unclosed_delimiter(DiagnosticKind::UnclosedAngle, "opened here", open);
                    return None;
                }
                Some(hole)
            }
            None => None,
        };

        Some(PatternKind::SymbolRange { first, last, data })
    }

    fn parse_combinator(&mut self) -> Option<Vec<PatternItem>> {
        self.bump();
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error(DiagnosticKind::ExpectedOpenParen);
            return None;
        }
        self.parse_list(Self::parse_item)
    }

    /// `'(' (elem (',' elem)*)? ')'`
    fn parse_list<T>(&mut self, mut elem: impl FnMut(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let open = self.bump();
        let mut items = Vec::new();
        if self.eat_token(SyntaxKind::ParenClose).is_some() {
            return Some(items);
        }
        loop {
            items.push(elem(self)?);
            if self.eat_token(SyntaxKind::Comma).is_none() {
                break;
            }
        }
        if self.eat_token(SyntaxKind::ParenClose).is_none() {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedParen, "opened here", open);
            return None;
        }
        Some(items)
    }

    fn parse_result(&mut self) -> Option<ResultingItem> {
        if !self.enter_recursion() {
            return None;
        }
        let result = self.parse_result_inner();
        self.exit_recursion();
        result
    }

    fn parse_result_inner(&mut self) -> Option<ResultingItem> {
        let start = self.current_span().start();
        let kind = match self.current() {
            SyntaxKind::KwNull => {
                self.bump();
                ResultingKind::Null
            }
            SyntaxKind::Hole => ResultingKind::HoleRef(self.parse_hole()?),
            SyntaxKind::Id => {
                let name_range = self.bump();
                let node_type = self.slice(name_range).to_string();
                let data = if self.currently_is(SyntaxKind::AngleOpen) {
                    Some(self.parse_data_block()?)
                } else {
                    None
                };
                let children = if self.currently_is(SyntaxKind::ParenOpen) {
                    self.parse_list(Self::parse_result)?
                } else {
                    Vec::new()
                };
                ResultingKind::Subtree {
                    node_type,
                    data,
                    children,
                }
            }
            _ => {
                self.error(DiagnosticKind::ExpectedResult);
                return None;
            }
        };
        Some(ResultingItem {
            kind,
            range: TextRange::new(start, self.last_end()),
        })
    }

    fn parse_data_block(&mut self) -> Option<DataPattern> {
        let open = self.bump();
        let data = match self.current() {
            SyntaxKind::Hole => DataPattern::Hole(self.parse_hole()?),
            SyntaxKind::StringLiteral => DataPattern::Static(self.parse_string()?),
            _ => {
                self.error(DiagnosticKind::ExpectedData);
                return None;
            }
        };
        if self.eat_token(SyntaxKind::AngleClose).is_none() {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedAngle, "opened here", open);
            return None;
        }
        Some(data)
    }

    fn parse_hole(&mut self) -> Option<Hole> {
        let span = self.bump();
        let text = self.slice(span);
        match text[1..].parse::<u32>() {
            Ok(n) => Some(Hole(n)),
            Err(_) => {
                self.error_at(DiagnosticKind::InvalidHoleNumber, span, text);
                None
            }
        }
    }

    fn parse_string(&mut self) -> Option<String> {
        let span = self.bump();
        let text = self.slice(span);
        match unescape(&text[1..text.len() - 1]) {
            Ok(s) => Some(s),
            Err(escape) => {
                self.error_at(DiagnosticKind::InvalidEscape, span, &escape);
                None
            }
        }
    }

    fn parse_char(&mut self) -> Option<char> {
        if !self.currently_is(SyntaxKind::CharLiteral) {
            self.error(DiagnosticKind::ExpectedCharLiteral);
            return None;
        }
        let span = self.bump();
        let text = self.slice(span);
        let body = match unescape(&text[1..text.len() - 1]) {
            Ok(body) => body,
            Err(escape) => {
                self.error_at(DiagnosticKind::InvalidEscape, span, &escape);
                return None;
            }
        };
        let mut chars = body.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => {
                self.error_at(DiagnosticKind::InvalidEscape, span, text);
                None
            }
        }
    }
}
