//! Core enums shared across the mathdown crates.

use serde::{Deserialize, Serialize};

/// Style directive for one physical line of a code block.
///
/// Derived from the line's first character: `+` marks an addition,
/// `-` a deletion, `>` an informational highlight. Anything else is
/// rendered plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    /// No marker; the line is left as-is
    Plain,
    /// `+` prefix (additive highlight)
    Addition,
    /// `-` prefix (deletion highlight)
    Deletion,
    /// `>` prefix (informational highlight)
    Highlight,
}

impl LineStyle {
    /// CSS class suffix for this style, or `None` for plain lines.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            LineStyle::Plain => None,
            LineStyle::Addition => Some("line-add"),
            LineStyle::Deletion => Some("line-del"),
            LineStyle::Highlight => Some("line-info"),
        }
    }
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineStyle::Plain => write!(f, "plain"),
            LineStyle::Addition => write!(f, "addition"),
            LineStyle::Deletion => write!(f, "deletion"),
            LineStyle::Highlight => write!(f, "highlight"),
        }
    }
}

/// Granularity of one typing-animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeMode {
    /// Reveal one character per tick
    Char,
    /// Reveal one full line per tick
    Line,
}

impl std::fmt::Display for TypeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeMode::Char => write!(f, "char"),
            TypeMode::Line => write!(f, "line"),
        }
    }
}

/// Loop behavior for a typing session.
///
/// Deserializes from either a boolean or an integer so that config files
/// can write `Loop = true` or `Loop = 1500` (a replay delay in ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoopSetting {
    /// `true` = loop with the default delay, `false` = no loop
    Flag(bool),
    /// Loop with this delay in milliseconds
    DelayMs(u64),
}

impl LoopSetting {
    /// The replay delay in ms, or `None` when looping is off.
    ///
    /// `Flag(true)` uses `default_ms`; `DelayMs(n)` overrides it.
    pub fn delay_ms(&self, default_ms: u64) -> Option<u64> {
        match self {
            LoopSetting::Flag(false) => None,
            LoopSetting::Flag(true) => Some(default_ms),
            LoopSetting::DelayMs(ms) => Some(*ms),
        }
    }
}

impl Default for LoopSetting {
    fn default() -> Self {
        LoopSetting::Flag(false)
    }
}

/// Resolved destination of a hyperlink.
///
/// Internal targets (leading `/`) use client-side navigation; everything
/// else opens in a new context with a trailing indicator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Site-relative path, navigated client-side
    Internal(String),
    /// Absolute or protocol-relative URL, opened externally
    External(String),
}

impl LinkTarget {
    /// Classify a raw href once, at render time.
    pub fn classify(href: &str) -> Self {
        if href.starts_with('/') {
            LinkTarget::Internal(href.to_string())
        } else {
            LinkTarget::External(href.to_string())
        }
    }

    /// The raw href regardless of variant.
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Internal(h) | LinkTarget::External(h) => h,
        }
    }
}
