//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use super::lexer::{SyntaxKind, Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::RuleFile;

#[derive(Debug)]
pub struct ParseResult {
    pub file: RuleFile,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// Trivia is dropped up front; the model keeps ranges only.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
    pub(super) default_language: String,
    depth: u32,
    last_diagnostic_pos: Option<TextSize>,
    exec_fuel_initial: u32,
    exec_fuel_remaining: u32,
    recursion_fuel_limit: u32,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(
        source: &'src str,
        tokens: Vec<Token>,
        exec_fuel: u32,
        recursion_fuel: u32,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            source,
            tokens: tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect(),
            pos: 0,
            diagnostics: Diagnostics::new(),
            default_language: default_language.into(),
            depth: 0,
            last_diagnostic_pos: None,
            exec_fuel_initial: exec_fuel,
            exec_fuel_remaining: exec_fuel,
            recursion_fuel_limit: recursion_fuel,
            fatal_error: None,
        }
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        let file = self.parse_file();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        Ok(ParseResult {
            file,
            diagnostics: self.diagnostics,
            exec_fuel_consumed: self.exec_fuel_initial - self.exec_fuel_remaining,
        })
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if self.exec_fuel_remaining == 0 {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::ExecFuelExhausted);
            }
            return;
        }
        self.exec_fuel_remaining -= 1;
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// End of the last consumed token.
    pub(super) fn last_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(TextSize::from(0), |t| t.span.end())
    }

    /// Consume the current token and return its span.
    pub(super) fn bump(&mut self) -> TextRange {
        assert!(!self.eof(), "bump called at EOF");
        self.consume_exec_fuel();
        let span = self.tokens[self.pos].span;
        self.pos += 1;
        span
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> Option<TextRange> {
        if self.currently_is(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, diagnostic: DiagnosticKind) -> bool {
        if self.eat_token(kind).is_some() {
            return true;
        }
        self.error(diagnostic);
        false
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    /// Report at the current token. One diagnostic per position.
    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange, message: &str) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        let full_range = TextRange::new(open_range.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open_range)
            .emit();
    }

    /// Skip to the end of the current statement: past the next `;`, or up
    /// to (not past) a `}` closing the enclosing block.
    pub(super) fn recover_statement(&mut self) {
        let mut open_braces = 0usize;
        while !self.should_stop() {
            match self.current() {
                SyntaxKind::Semicolon => {
                    self.bump();
                    return;
                }
                SyntaxKind::BraceOpen => open_braces += 1,
                SyntaxKind::BraceClose if open_braces == 0 => return,
                SyntaxKind::BraceClose => open_braces -= 1,
                _ => {}
            }
            self.bump();
        }
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_fuel_limit {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
