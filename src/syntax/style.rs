//! Style types for rendering highlighted text
//!
//! Colors, the per-kind color table, and the fixed visual profile of
//! the surface the markup is displayed on.

use std::collections::HashMap;
use std::fmt;

use super::tokens::TokenKind;

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (either case)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Mapping from token kind to display color
///
/// A kind with no entry renders uncolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    colors: HashMap<TokenKind, Color>,
}

impl StyleTable {
    /// A table with no colors at all
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Color for a kind, if any
    pub fn get(&self, kind: TokenKind) -> Option<Color> {
        self.colors.get(&kind).copied()
    }

    /// Assign a color to a kind
    pub fn set(&mut self, kind: TokenKind, color: Color) {
        self.colors.insert(kind, color);
    }

    /// Builder: assign a color to a kind
    pub fn with(mut self, kind: TokenKind, color: Color) -> Self {
        self.set(kind, color);
        self
    }

    /// Remove the color for a kind
    pub fn remove(&mut self, kind: TokenKind) {
        self.colors.remove(&kind);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::empty()
            .with(TokenKind::Comment, Color::rgb(0x6c, 0x72, 0x80))
            .with(TokenKind::String, Color::rgb(0x05, 0x96, 0x69))
            .with(TokenKind::Keyword, Color::rgb(0x7c, 0x3a, 0xed))
            .with(TokenKind::Boolean, Color::rgb(0xd9, 0x77, 0x06))
            .with(TokenKind::Number, Color::rgb(0x25, 0x63, 0xeb))
            .with(TokenKind::Operator, Color::rgb(0xf5, 0x9e, 0x0b))
            .with(TokenKind::Punctuation, Color::rgb(0x6b, 0x72, 0x80))
            .with(TokenKind::Builtin, Color::rgb(0xd9, 0x46, 0xef))
    }
}

/// Visual profile applied once to the surface displaying the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProfile {
    /// Class name marking the block's language
    pub class: String,
    pub background: Color,
    pub foreground: Color,
    pub padding: String,
    pub border_radius: String,
    pub overflow: String,
    pub font_family: String,
}

impl StyleProfile {
    /// Inline CSS declarations for this profile
    pub fn css(&self) -> String {
        format!(
            "background: {}; color: {}; padding: {}; border-radius: {}; overflow: {}; font-family: {}",
            self.background,
            self.foreground,
            self.padding,
            self.border_radius,
            self.overflow,
            self.font_family
        )
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            class: "language-javascript".to_string(),
            background: Color::rgb(0x1e, 0x29, 0x3b),
            foreground: Color::rgb(0xff, 0xff, 0xff),
            padding: "1rem".to_string(),
            border_radius: "0.25rem".to_string(),
            overflow: "auto".to_string(),
            font_family: "monospace".to_string(),
        }
    }
}
