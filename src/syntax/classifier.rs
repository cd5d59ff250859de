//! Word classification
//!
//! Resolves an identifier-shaped token into a keyword, boolean literal,
//! builtin name or plain identifier.

use std::collections::HashSet;

use regex::Regex;

use super::javascript::{BOOLEANS, BUILTIN_PATTERN, KEYWORDS};
use super::tokens::TokenKind;

/// Checks words against fixed tables, in priority order
pub struct Classifier {
    keywords: HashSet<String>,
    booleans: HashSet<String>,
    builtins: Option<Regex>,
}

impl Classifier {
    /// Create a classifier from explicit tables
    pub fn new(keywords: &[&str], booleans: &[&str], builtin_pattern: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            booleans: booleans.iter().map(|s| s.to_string()).collect(),
            builtins: Regex::new(builtin_pattern).ok(),
        }
    }

    /// Kind for a word; anything unrecognized is plain text
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.keywords.contains(word) {
            TokenKind::Keyword
        } else if self.booleans.contains(word) {
            TokenKind::Boolean
        } else if self.builtins.as_ref().is_some_and(|re| re.is_match(word)) {
            TokenKind::Builtin
        } else {
            TokenKind::PlainText
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(KEYWORDS, BOOLEANS, BUILTIN_PATTERN)
    }
}
