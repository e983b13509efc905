//! Mathdown Core
//!
//! This crate provides core types, enums, and error definitions
//! for the mathdown document renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`CodeBlockOptions`], [`TypingOptions`] - Per-block rendering options
//! - [`LineStyle`], [`TypeMode`], [`LoopSetting`], [`LinkTarget`] - Shared enums
//! - [`classify_line`], [`strip_line_markers`] - The diff-line pre-pass
//! - [`MathdownError`] - Error types

pub mod error;
pub mod enums;
pub mod lines;
pub mod types;

pub use error::{MathdownError, Result};
pub use enums::{LineStyle, LinkTarget, LoopSetting, TypeMode};
pub use lines::{classify_line, strip_line_markers};
pub use types::{CodeBlockOptions, TypingOptions};
