//! Code block display flags.

use serde::{Deserialize, Serialize};

/// Display flags for rendered code blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplayConfig {
    /// Show a line-number gutter.
    /// Default: false
    #[serde(default)]
    pub line_numbers: bool,

    /// Show the copy action in the block header.
    /// Default: true
    #[serde(default = "default_true")]
    pub copy_button: bool,

    /// Show the language label in the block header.
    /// Default: true
    #[serde(default = "default_true")]
    pub language_hint: bool,

    /// Show the footer attribution strip.
    /// Default: true
    #[serde(default = "default_true")]
    pub attribution: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            line_numbers: false,
            copy_button: true,
            language_hint: true,
            attribution: true,
        }
    }
}

impl DisplayConfig {
    /// Merge another DisplayConfig into this one.
    ///
    /// All fields are copied from `other`; TOML does not distinguish
    /// "not set" from "set to default", so overrides are parsed as
    /// partial configs with the defaults already applied.
    pub fn merge(&mut self, other: &DisplayConfig) {
        self.line_numbers = other.line_numbers;
        self.copy_button = other.copy_button;
        self.language_hint = other.language_hint;
        self.attribution = other.attribution;
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = DisplayConfig::default();
        assert!(!d.line_numbers);
        assert!(d.copy_button);
        assert!(d.language_hint);
        assert!(d.attribution);
    }

    #[test]
    fn test_merge_copies_all_fields() {
        let mut a = DisplayConfig::default();
        let b = DisplayConfig {
            line_numbers: true,
            copy_button: false,
            language_hint: false,
            attribution: false,
        };
        a.merge(&b);
        assert!(a.line_numbers);
        assert!(!a.copy_button);
        assert!(!a.language_hint);
        assert!(!a.attribution);
    }
}
