//! jshl - JavaScript syntax highlighting
//!
//! Classifies runs of source text into lexical categories and renders
//! them as colored HTML spans. Concatenating the unescaped text of the
//! output reproduces the input exactly.
//!
//! ```
//! let html = jshl::highlight("const x = 1;");
//! assert!(html.starts_with("<span style=\"color: #7c3aed\">const</span>"));
//! ```

pub mod config;
pub mod error;
pub mod syntax;
pub mod terminal;

use std::sync::OnceLock;

pub use error::{HighlightError, Result};
pub use syntax::{Highlighted, Highlighter, StyleProfile, StyleTable, TokenKind};

/// Highlight `text` with the default colors
///
/// Uses a shared highlighter that is built on first use.
pub fn highlight(text: &str) -> String {
    static DEFAULT: OnceLock<Highlighter> = OnceLock::new();
    DEFAULT.get_or_init(Highlighter::new).highlight(text)
}
