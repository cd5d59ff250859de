//! Token kinds for syntax highlighting
//!
//! This module defines the lexical categories a run of source text
//! can be classified into, and the tokens the highlighter produces.

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Line (`//`) and block (`/* */`) comments
    Comment,
    /// String literals quoted with `'`, `"` or `` ` ``
    String,
    /// Reserved words (const, function, return, ...)
    Keyword,
    /// `true` and `false`
    Boolean,
    /// Well-known globals (console, Math, Promise, ...)
    Builtin,
    /// Hex and decimal numeric literals
    Number,
    /// Runs of operator symbols
    Operator,
    /// Runs of brackets, separators and dots
    Punctuation,
    /// Identifiers and anything left unmatched
    PlainText,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Boolean,
        TokenKind::Builtin,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::PlainText,
    ];

    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::String => "String",
            TokenKind::Keyword => "Keyword",
            TokenKind::Boolean => "Boolean",
            TokenKind::Builtin => "Builtin",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::PlainText => "PlainText",
        }
    }

    /// Parse a kind from its name (for theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A classified slice `[start, end)` of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
    /// Lexical category
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    /// The slice of `source` this token covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if token is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
