//! Typing animation configuration.

use mathdown_core::{LoopSetting, TypeMode, TypingOptions};
use serde::{Deserialize, Serialize};

/// Typing animation configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypingConfig {
    /// Animate code blocks as if being typed.
    /// Default: false
    #[serde(default)]
    pub enabled: bool,

    /// Per-unit reveal delay in milliseconds.
    /// Default: 50
    #[serde(default = "default_speed")]
    pub speed_ms: u64,

    /// Reveal granularity ("char" or "line").
    /// Default: char
    #[serde(default = "default_mode")]
    pub mode: TypeMode,

    /// Loop behavior: `false`, `true` (default delay), or a delay in ms.
    /// Default: false
    #[serde(rename = "Loop", default)]
    pub loop_setting: LoopSetting,

    /// Default replay delay in milliseconds when `Loop = true`.
    /// Default: 1000
    #[serde(default = "default_delay")]
    pub delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            speed_ms: default_speed(),
            mode: default_mode(),
            loop_setting: LoopSetting::default(),
            delay_ms: default_delay(),
        }
    }
}

impl TypingConfig {
    /// Merge another TypingConfig into this one.
    pub fn merge(&mut self, other: &TypingConfig) {
        self.enabled = other.enabled;
        self.speed_ms = other.speed_ms;
        self.mode = other.mode;
        self.loop_setting = other.loop_setting;
        self.delay_ms = other.delay_ms;
    }

    /// Convert into the per-block option record.
    pub fn to_options(&self) -> TypingOptions {
        TypingOptions {
            enabled: self.enabled,
            speed_ms: self.speed_ms,
            mode: self.mode,
            loop_setting: self.loop_setting,
            delay_ms: self.delay_ms,
        }
    }
}

fn default_speed() -> u64 {
    50
}

fn default_mode() -> TypeMode {
    TypeMode::Char
}

fn default_delay() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_option_defaults() {
        let from_config = TypingConfig::default().to_options();
        assert_eq!(from_config, TypingOptions::default());
    }

    #[test]
    fn test_to_options_carries_loop_override() {
        let config = TypingConfig {
            enabled: true,
            loop_setting: LoopSetting::DelayMs(200),
            ..Default::default()
        };
        let opts = config.to_options();
        assert!(opts.enabled);
        assert_eq!(opts.loop_setting.delay_ms(opts.delay_ms), Some(200));
    }
}
