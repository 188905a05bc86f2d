//! Token types for the jsonfsm lexer.
//!
//! Tokens are deliberately flat: a [`TokenKind`] category plus the lexeme text. Structural tokens
//! can be viewed through the typed [`Structural`] enum (see `crate::token_helpers`).

use std::fmt;

// ============================================================================
// SPAN
// ============================================================================

/// Byte range of a token in the lexed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Category of a token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of `{ } [ ] : ,`.
    Structural,
    /// Content between double quotes, quotes stripped.
    String,
    /// Digit run with an optional leading `-`.
    Number,
    /// Unrecognized character or ill-formed lexeme. Fatal once it reaches the checker.
    Error,
}

impl TokenKind {
    /// Upper-case name used in token dumps and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Structural => "STRUCTURAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, lexeme and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Token dump form: `KIND : text`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.kind, self.text)
    }
}

// ============================================================================
// STRUCTURAL CHARACTERS
// ============================================================================

/// The six single-character structural tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structural {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
}

/// All structural characters, in canonical order.
pub const STRUCTURAL: &[Structural] = &[
    Structural::LBrace,
    Structural::RBrace,
    Structural::LBracket,
    Structural::RBracket,
    Structural::Colon,
    Structural::Comma,
];

impl Structural {
    /// Look up a structural character. Returns `None` for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '{' => Some(Structural::LBrace),
            '}' => Some(Structural::RBrace),
            '[' => Some(Structural::LBracket),
            ']' => Some(Structural::RBracket),
            ':' => Some(Structural::Colon),
            ',' => Some(Structural::Comma),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Structural::LBrace => '{',
            Structural::RBrace => '}',
            Structural::LBracket => '[',
            Structural::RBracket => ']',
            Structural::Colon => ':',
            Structural::Comma => ',',
        }
    }

    /// `true` for `{` and `[`.
    pub fn is_open(self) -> bool {
        matches!(self, Structural::LBrace | Structural::LBracket)
    }

    /// `true` for `}` and `]`.
    pub fn is_close(self) -> bool {
        matches!(self, Structural::RBrace | Structural::RBracket)
    }

    /// The closer that matches an opener, if this is one.
    pub fn closer(self) -> Option<Structural> {
        match self {
            Structural::LBrace => Some(Structural::RBrace),
            Structural::LBracket => Some(Structural::RBracket),
            _ => None,
        }
    }
}

impl fmt::Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
