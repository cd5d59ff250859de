//! Matching rules for tokenization
//!
//! Each rule answers one question: does a token of its category start
//! exactly at this position, and if so where does it end? Rules are
//! tried in a fixed order and the first one that answers wins.

use regex::Regex;

use super::tokens::TokenKind;

/// Something that can recognize a token at a position
pub trait Matcher {
    /// Try to match at byte offset `pos` of `text`.
    ///
    /// Returns the exclusive end offset of the match. A match is never
    /// empty: the returned offset is always greater than `pos`.
    fn try_at(&self, text: &str, pos: usize) -> Option<usize>;
}

/// A regex rule anchored at the current position
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled pattern, anchored with `^`
    pub pattern: Regex,
}

impl PatternRule {
    /// Create a new pattern rule; `pattern` is anchored automatically
    pub fn new(name: &str, pattern: &str) -> Option<Self> {
        Regex::new(&format!("^(?:{})", pattern)).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
        })
    }
}

impl Matcher for PatternRule {
    fn try_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        self.pattern
            .find(&text[pos..])
            .filter(|m| !m.is_empty())
            .map(|m| pos + m.end())
    }
}

/// Line and block comments
///
/// An unterminated block comment runs to the end of the input.
pub struct CommentRule;

impl Matcher for CommentRule {
    fn try_at(&self, text: &str, pos: usize) -> Option<usize> {
        let rest = text.get(pos..)?;
        if rest.starts_with("//") {
            let len = rest
                .find(|c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
                .unwrap_or(rest.len());
            Some(pos + len)
        } else if let Some(body) = rest.strip_prefix("/*") {
            let end = body.find("*/").map_or(text.len(), |i| pos + 2 + i + 2);
            Some(end)
        } else {
            None
        }
    }
}

/// Quoted string literals, scanned character by character
///
/// A backslash escapes whatever follows it. The first unescaped copy of
/// the opening quote closes the string; without one the string runs to
/// the end of the input.
pub struct StringRule {
    /// Characters that may open (and then close) a string
    pub quotes: Vec<char>,
    /// Escape character (usually backslash)
    pub escape_char: char,
}

impl StringRule {
    pub fn new(quotes: &[char], escape_char: char) -> Self {
        Self {
            quotes: quotes.to_vec(),
            escape_char,
        }
    }
}

impl Matcher for StringRule {
    fn try_at(&self, text: &str, pos: usize) -> Option<usize> {
        let rest = text.get(pos..)?;
        let quote = rest.chars().next().filter(|c| self.quotes.contains(c))?;

        let mut escaped = false;
        for (i, ch) in rest.char_indices().skip(1) {
            if escaped {
                escaped = false;
            } else if ch == self.escape_char {
                escaped = true;
            } else if ch == quote {
                return Some(pos + i + ch.len_utf8());
            }
        }
        Some(text.len())
    }
}

/// One entry of a rule list, tagged with the category it produces
pub enum Rule {
    Comment(CommentRule),
    String(StringRule),
    /// Identifier-shaped runs; their kind is decided by the classifier
    Word(PatternRule),
    Number(PatternRule),
    Operator(PatternRule),
    Punctuation(PatternRule),
}

impl Rule {
    /// Kind assigned to a match, before any classification
    pub fn kind(&self) -> TokenKind {
        match self {
            Rule::Comment(_) => TokenKind::Comment,
            Rule::String(_) => TokenKind::String,
            Rule::Word(_) => TokenKind::PlainText,
            Rule::Number(_) => TokenKind::Number,
            Rule::Operator(_) => TokenKind::Operator,
            Rule::Punctuation(_) => TokenKind::Punctuation,
        }
    }

    /// Whether matches must be passed through the classifier
    pub fn is_word(&self) -> bool {
        matches!(self, Rule::Word(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Rule::Comment(_) => "comment",
            Rule::String(_) => "string",
            Rule::Word(rule)
            | Rule::Number(rule)
            | Rule::Operator(rule)
            | Rule::Punctuation(rule) => rule.name.as_str(),
        }
    }
}

impl Matcher for Rule {
    fn try_at(&self, text: &str, pos: usize) -> Option<usize> {
        match self {
            Rule::Comment(rule) => rule.try_at(text, pos),
            Rule::String(rule) => rule.try_at(text, pos),
            Rule::Word(rule)
            | Rule::Number(rule)
            | Rule::Operator(rule)
            | Rule::Punctuation(rule) => rule.try_at(text, pos),
        }
    }
}
