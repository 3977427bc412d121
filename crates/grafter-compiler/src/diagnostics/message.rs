use rowan::TextRange;

/// Diagnostic kinds ordered by phase: syntax first, then pattern shape,
/// holes, and type linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Missing closing delimiter
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,
    UnclosedAngle,

    // User omitted something required
    ExpectedPattern,
    ExpectedResult,
    ExpectedData,
    ExpectedHole,
    ExpectedCharLiteral,
    ExpectedRangeDots,
    ExpectedOpenParen,
    ExpectedOpenBrace,
    ExpectedLanguageName,
    ExpectedArrow,
    ExpectedSemicolon,

    // User wrote something that doesn't belong
    UnexpectedToken,
    InvalidEscape,
    InvalidHoleNumber,
    NestedMode,

    // Malformed patterns
    EmptyPattern,
    ModeNotAllowed,
    EmptyCombinator,
    InvalidSymbolRange,
    UntypedHoleAsNode,
    NegationNotAllowed,
    HoleUnderNegation,
    MisplacedEllipsis,
    DataHoleInRepeated,

    // Hole numbering
    DuplicateHole,
    UndeclaredHole,

    // Link pass - type hierarchy
    UnknownNodeType,
    AbstractResultType,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Syntax errors reported by the parser.
    pub fn is_syntax_error(&self) -> bool {
        *self <= Self::NestedMode
    }

    /// Left-side shape violations found by validation.
    pub fn is_malformed_pattern(&self) -> bool {
        matches!(
            self,
            Self::EmptyPattern
                | Self::ModeNotAllowed
                | Self::EmptyCombinator
                | Self::InvalidSymbolRange
                | Self::UntypedHoleAsNode
                | Self::NegationNotAllowed
                | Self::HoleUnderNegation
                | Self::MisplacedEllipsis
                | Self::DataHoleInRepeated
        )
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedAngle => "missing closing `>`",

            Self::ExpectedPattern => "expected a pattern",
            Self::ExpectedResult => "expected a result",
            Self::ExpectedData => "expected a hole or a string",
            Self::ExpectedHole => "expected a hole",
            Self::ExpectedCharLiteral => "expected a character literal",
            Self::ExpectedRangeDots => "expected `..` in symbol range",
            Self::ExpectedOpenParen => "expected `(`",
            Self::ExpectedOpenBrace => "expected `{`",
            Self::ExpectedLanguageName => "expected language name",
            Self::ExpectedArrow => "expected `->`",
            Self::ExpectedSemicolon => "expected `;`",

            Self::UnexpectedToken => "unexpected token",
            Self::InvalidEscape => "invalid escape sequence",
            Self::InvalidHoleNumber => "invalid hole number",
            Self::NestedMode => "matching modes cannot be nested",

            Self::EmptyPattern => "rule has no left-side items",
            Self::ModeNotAllowed => "only top-level items can be optional or repeated",
            Self::EmptyCombinator => "combinator needs at least one item",
            Self::InvalidSymbolRange => "symbol range is empty",
            Self::UntypedHoleAsNode => "untyped hole cannot stand for a whole node",
            Self::NegationNotAllowed => "only nodes, typed holes and `|` can be negated",
            Self::HoleUnderNegation => "hole under negation can never be bound",
            Self::MisplacedEllipsis => "ellipsis must be the last child of a node",
            Self::DataHoleInRepeated => "data hole cannot be repeated",

            Self::DuplicateHole => "duplicate hole",
            Self::UndeclaredHole => "undeclared hole",

            Self::UnknownNodeType => "unknown node type",
            Self::AbstractResultType => "abstract type cannot be built",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateHole => "hole `{}` is declared more than once".to_string(),
            Self::UndeclaredHole => "hole `{}` is not declared on the left side".to_string(),
            Self::UnknownNodeType => "`{}` is not a known node type".to_string(),
            Self::AbstractResultType => "`{}` is abstract and cannot be built".to_string(),

            Self::UnclosedParen
            | Self::UnclosedBracket
            | Self::UnclosedBrace
            | Self::UnclosedAngle => {
                format!("{}; {{}}", self.fallback_message())
            }

            // Malformed patterns name the offending fragment
            kind if kind.is_malformed_pattern() => {
                format!("{}: `{{}}`", self.fallback_message())
            }

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
