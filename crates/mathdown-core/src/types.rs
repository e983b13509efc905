//! Option records for code block rendering and typing animation.

use crate::enums::{LoopSetting, TypeMode};
use serde::{Deserialize, Serialize};

/// Typing-animation options for one code block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingOptions {
    /// Whether the typing animation runs at all
    pub enabled: bool,
    /// Delay per revealed unit, in milliseconds (char mode; line mode
    /// multiplies this by [`TypingOptions::LINE_DELAY_FACTOR`])
    pub speed_ms: u64,
    /// Reveal granularity
    pub mode: TypeMode,
    /// Loop behavior after a pass completes
    pub loop_setting: LoopSetting,
    /// Default replay delay in milliseconds (used when `loop_setting`
    /// is `Flag(true)`)
    pub delay_ms: u64,
}

impl TypingOptions {
    /// Line-mode ticks are deliberately slower than char-mode ticks.
    pub const LINE_DELAY_FACTOR: u64 = 20;

    /// Effective per-tick delay in milliseconds for the configured mode.
    pub fn tick_ms(&self) -> u64 {
        match self.mode {
            TypeMode::Char => self.speed_ms,
            TypeMode::Line => self.speed_ms * Self::LINE_DELAY_FACTOR,
        }
    }
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            speed_ms: 50,
            mode: TypeMode::Char,
            loop_setting: LoopSetting::Flag(false),
            delay_ms: 1000,
        }
    }
}

/// Display and typing options for one code block instance.
///
/// Owned by the component rendering that block; never shared between
/// blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockOptions {
    /// Fallback language when the fence declares none
    pub language: Option<String>,
    /// Show a line-number gutter
    pub show_line_numbers: bool,
    /// Show the copy action in the header
    pub show_copy_button: bool,
    /// Show the language label in the header
    pub show_language_hint: bool,
    /// Show the footer attribution strip
    pub show_attribution: bool,
    /// Typing animation settings
    pub typing: TypingOptions,
}

impl Default for CodeBlockOptions {
    fn default() -> Self {
        Self {
            language: None,
            show_line_numbers: false,
            show_copy_button: true,
            show_language_hint: true,
            show_attribution: true,
            typing: TypingOptions::default(),
        }
    }
}
