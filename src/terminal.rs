//! Terminal output using crossterm
//!
//! Writes highlighted tokens as ANSI-colored text instead of HTML.

use std::io::Write;

use crossterm::{
    queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, Highlighter};

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        TermColor::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Writes highlighted text to any terminal-like output
pub struct AnsiWriter<W: Write> {
    out: W,
}

impl<W: Write> AnsiWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `text` with each token in its color
    ///
    /// Tokens without a color are printed as-is.
    pub fn write_highlighted(&mut self, highlighter: &Highlighter, text: &str) -> Result<()> {
        for token in highlighter.tokens(text) {
            let piece = token.text(text);
            match highlighter.styles().get(token.kind) {
                Some(color) => {
                    queue!(
                        self.out,
                        SetForegroundColor(color.into()),
                        Print(piece),
                        ResetColor
                    )?;
                }
                None => queue!(self.out, Print(piece))?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
