//! Syntax highlighting
//!
//! This module turns JavaScript source text into colored markup:
//! - Rules recognize the next token at a position, in priority order
//! - The classifier refines identifier-shaped tokens
//! - The renderer escapes each token and wraps it in a colored span

mod classifier;
mod highlighter;
mod javascript;
mod render;
mod rules;
mod style;
mod theme;
mod tokens;

pub use classifier::Classifier;
pub use highlighter::{Highlighter, Tokens};
pub use render::{escape_html, markup, Highlighted, Segment};
pub use rules::{CommentRule, Matcher, PatternRule, Rule, StringRule};
pub use style::{Color, StyleProfile, StyleTable};
pub use theme::Theme;
pub use tokens::{Token, TokenKind};
