//! Tokens of the type-descriptor grammar.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

/// A span of descriptor text.
///
/// Descriptors are single logical lines, so only the byte range and the
/// 1-based column of the first character are tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based column where this span starts, counted in characters.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, column: u32) -> Self {
        Self { start, end, column }
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this token can name a field.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self.kind, TokenKind::Ident(_) | TokenKind::Quoted(_))
    }
}

/// The bracket pair around a parameter suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `[...]`, as in `timestamp[ms]`.
    Square,
    /// `(...)`, as in `decimal128(10, 2)`.
    Round,
}

impl Bracket {
    /// Returns the opening character.
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Square => '[',
            Self::Round => '(',
        }
    }

    /// Returns the closing character.
    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Square => ']',
            Self::Round => ')',
        }
    }
}

/// Raw parameter text of a type, with the brackets it was written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameters {
    /// Text between the brackets, trimmed.
    pub text: String,
    /// Which brackets enclosed it.
    pub bracket: Bracket,
}

impl Parameters {
    /// Creates a parameter suffix.
    #[must_use]
    pub fn new(text: impl Into<String>, bracket: Bracket) -> Self {
        Self {
            text: text.into(),
            bracket,
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.bracket.open(), self.text, self.bracket.close())
    }
}

/// Token types of the descriptor grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `<`
    LAngle,
    /// `>`
    RAngle,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// Bare word such as `int32`, `struct`, or a field name.
    Ident(String),
    /// Field name quoted with backticks or double quotes, without the quotes.
    Quoted(String),
    /// A `[...]` or `(...)` parameter suffix.
    Params(Parameters),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LAngle => "'<'",
            Self::RAngle => "'>'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Ident(_) => "identifier",
            Self::Quoted(_) => "quoted name",
            Self::Params(_) => "type parameters",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
