//! Mathdown Config
//!
//! This crate handles configuration loading and management for
//! mathdown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mathdown/config.toml`
//! - macOS: `~/Library/Application Support/mathdown/config.toml`
//! - Windows: `%APPDATA%\mathdown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mathdown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! let options = config.code_block_options();
//! ```

mod display;
mod typing;

pub use display::DisplayConfig;
pub use typing::TypingConfig;

use mathdown_core::{CodeBlockOptions, MathdownError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[display]
LineNumbers  = false
CopyButton   = true
LanguageHint = true
Attribution  = true

[typing]
Enabled = false
SpeedMs = 50
Mode    = "char"
Loop    = false
DelayMs = 1000
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for mathdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Code block display flags
    #[serde(default)]
    pub display: DisplayConfig,

    /// Typing animation configuration
    #[serde(default)]
    pub typing: TypingConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mathdown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[display]"));
    /// assert!(toml.contains("[typing]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mathdown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the platform config path, falling back
    /// to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a TOML configuration string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MathdownError::Config(e.to_string()))
    }

    /// Merge another config into this one. The override file only
    /// needs the values the user wants to change.
    pub fn merge(&mut self, other: &Config) {
        self.display.merge(&other.display);
        self.typing.merge(&other.typing);
    }

    /// Build per-block options from the configured sections.
    pub fn code_block_options(&self) -> CodeBlockOptions {
        CodeBlockOptions {
            language: None,
            show_line_numbers: self.display.line_numbers,
            show_copy_button: self.display.copy_button,
            show_language_hint: self.display.language_hint,
            show_attribution: self.display.attribution,
            typing: self.typing.to_options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathdown_core::{LoopSetting, TypeMode};

    #[test]
    fn test_default_round_trip() {
        let config = Config::default();
        assert!(!config.display.line_numbers);
        assert!(config.display.copy_button);
        assert!(!config.typing.enabled);
        assert_eq!(config.typing.speed_ms, 50);
    }

    #[test]
    fn test_parse_partial_override() {
        let config = Config::parse("[display]\nLineNumbers = true\n").unwrap();
        assert!(config.display.line_numbers);
        // Untouched sections fall back to defaults
        assert!(config.display.copy_button);
        assert_eq!(config.typing.mode, TypeMode::Char);
    }

    #[test]
    fn test_loop_accepts_bool_and_integer() {
        let config = Config::parse("[typing]\nLoop = true\n").unwrap();
        assert_eq!(config.typing.loop_setting, LoopSetting::Flag(true));

        let config = Config::parse("[typing]\nLoop = 1500\n").unwrap();
        assert_eq!(config.typing.loop_setting, LoopSetting::DelayMs(1500));
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let over = Config::parse("[typing]\nEnabled = true\nMode = \"line\"\n").unwrap();
        base.merge(&over);
        assert!(base.typing.enabled);
        assert_eq!(base.typing.mode, TypeMode::Line);
    }

    #[test]
    fn test_code_block_options() {
        let config = Config::parse("[display]\nCopyButton = false\n[typing]\nEnabled = true\n")
            .unwrap();
        let opts = config.code_block_options();
        assert!(!opts.show_copy_button);
        assert!(opts.typing.enabled);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(Config::parse("display = nonsense [").is_err());
    }
}
