//! Theme files
//!
//! A theme substitutes the color table and/or the surface profile.
//!
//! Example:
//! ```toml
//! [colors]
//! Comment = "#6c7280"
//! Keyword = "#7c3aed"
//!
//! [profile]
//! background = "#1e293b"
//! font-family = "monospace"
//! ```

use std::fs;
use std::path::Path;

use crate::error::{HighlightError, Result};

use super::style::{Color, StyleProfile, StyleTable};
use super::tokens::TokenKind;

/// Colors plus surface profile, as loaded from a theme file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub styles: StyleTable,
    pub profile: StyleProfile,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading theme from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse theme TOML
    ///
    /// Sections that are absent keep their defaults. Inside `[colors]`,
    /// kinds that are not listed get no color.
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut theme = Theme::default();

        for (key, value) in &table {
            match key.as_str() {
                "colors" => theme.styles = parse_colors(value)?,
                "profile" => parse_profile(value, &mut theme.profile)?,
                other => {
                    return Err(HighlightError::InvalidTheme(format!(
                        "unknown section [{}]",
                        other
                    )))
                }
            }
        }

        log::debug!("theme defines {} colors", theme.styles.len());
        Ok(theme)
    }
}

fn section<'a>(name: &str, value: &'a toml::Value) -> Result<&'a toml::Table> {
    value
        .as_table()
        .ok_or_else(|| HighlightError::InvalidTheme(format!("[{}] must be a table", name)))
}

fn string_value<'a>(key: &str, value: &'a toml::Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| HighlightError::InvalidTheme(format!("{} must be a string", key)))
}

fn color_value(key: &str, value: &toml::Value) -> Result<Color> {
    let hex = string_value(key, value)?;
    Color::from_hex(hex).ok_or_else(|| HighlightError::InvalidColor(format!("{} = {}", key, hex)))
}

fn parse_colors(value: &toml::Value) -> Result<StyleTable> {
    let mut styles = StyleTable::empty();
    for (name, value) in section("colors", value)? {
        let kind =
            TokenKind::from_name(name).ok_or_else(|| HighlightError::UnknownKind(name.clone()))?;
        styles.set(kind, color_value(name, value)?);
    }
    Ok(styles)
}

fn parse_profile(value: &toml::Value, profile: &mut StyleProfile) -> Result<()> {
    for (key, value) in section("profile", value)? {
        match key.as_str() {
            "class" => profile.class = string_value(key, value)?.to_string(),
            "background" => profile.background = color_value(key, value)?,
            "foreground" => profile.foreground = color_value(key, value)?,
            "padding" => profile.padding = string_value(key, value)?.to_string(),
            "border-radius" => profile.border_radius = string_value(key, value)?.to_string(),
            "overflow" => profile.overflow = string_value(key, value)?.to_string(),
            "font-family" => profile.font_family = string_value(key, value)?.to_string(),
            other => {
                return Err(HighlightError::InvalidTheme(format!(
                    "unknown profile key {}",
                    other
                )))
            }
        }
    }
    Ok(())
}
