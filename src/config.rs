//! Configuration file support
//!
//! Loads settings from ~/.jshl.conf (or %USERPROFILE%\.jshl.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # jshl configuration
//! theme = /home/me/.config/jshl/dark.toml
//! output = ansi
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// What the CLI writes for a highlighted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A complete `<pre>` block with the style profile
    #[default]
    Html,
    /// Only the span markup
    Markup,
    /// ANSI-colored text for a terminal
    Ansi,
    /// One line per token, for debugging
    Tokens,
}

impl OutputMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "html" => Some(OutputMode::Html),
            "markup" => Some(OutputMode::Markup),
            "ansi" => Some(OutputMode::Ansi),
            "tokens" => Some(OutputMode::Tokens),
            _ => None,
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Theme file to load instead of the built-in colors
    pub theme: Option<PathBuf>,
    /// Default output mode
    pub output: OutputMode,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".jshl.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".jshl.conf"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                log::debug!("loading config from {}", path.display());
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("theme") {
            if !value.is_empty() {
                self.theme = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = settings.get("output") {
            match OutputMode::from_name(value) {
                Some(mode) => self.output = mode,
                None => log::warn!("ignoring unknown output mode in config: {}", value),
            }
        }
    }
}
