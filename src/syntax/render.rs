//! HTML rendering of token streams
//!
//! Every token becomes one segment: its HTML-escaped text, wrapped in a
//! colored span when the style table has a color for its kind.

use std::fmt::Write;

use super::style::{Color, StyleProfile, StyleTable};
use super::tokens::Token;

/// Escape text for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// A rendered token: escaped text plus an optional color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// HTML-escaped token text
    pub text: String,
    pub color: Option<Color>,
}

impl Segment {
    /// Render a token of `source` using `styles`
    pub fn from_token(token: &Token, source: &str, styles: &StyleTable) -> Self {
        Self {
            text: escape_html(token.text(source)),
            color: styles.get(token.kind),
        }
    }

    /// Append this segment's markup to `out`
    pub fn write_markup(&self, out: &mut String) {
        match self.color {
            Some(color) => {
                let _ = write!(out, "<span style=\"color: {}\">{}</span>", color, self.text);
            }
            None => out.push_str(&self.text),
        }
    }
}

/// Concatenate segments into one markup string
pub fn markup<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> String {
    let mut out = String::new();
    for segment in segments {
        segment.write_markup(&mut out);
    }
    out
}

/// Highlighted markup together with the profile its surface must apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    pub markup: String,
    pub profile: StyleProfile,
}

impl Highlighted {
    /// A complete `<pre>` block with the profile applied once
    pub fn to_html(&self) -> String {
        format!(
            "<pre class=\"{}\" style=\"{}\">{}</pre>",
            escape_html(&self.profile.class),
            escape_html(&self.profile.css()),
            self.markup
        )
    }
}
