//! Clipboard integration.
//!
//! Two pieces: the OSC 52 escape that hands text to the hosting
//! terminal's clipboard, and the small per-block state that backs the
//! 2-second "copied" confirmation on copy buttons.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Maximum size for OSC 52 clipboard (50KB, terminal limit).
const MAX_CLIPBOARD_SIZE: usize = 50_000;

/// How long a copy confirmation stays visible.
pub const COPIED_WINDOW: Duration = Duration::from_secs(2);

/// Copy text to the system clipboard via the OSC 52 escape sequence.
///
/// Works in many modern terminals (kitty, iTerm2, tmux, ...). Text
/// over the size cap is silently skipped rather than risking a
/// confused terminal.
///
/// # Example
/// ```ignore
/// use std::io::stdout;
/// use mathdown_render::features::copy_to_clipboard;
///
/// copy_to_clipboard("raw document text", &mut stdout()).unwrap();
/// ```
pub fn copy_to_clipboard<W: Write>(text: &str, writer: &mut W) -> io::Result<()> {
    use base64::{engine::general_purpose::STANDARD, Engine};

    if text.len() > MAX_CLIPBOARD_SIZE {
        return Ok(());
    }

    let encoded = STANDARD.encode(text.as_bytes());

    // OSC 52: \033]52;c;<base64>\a, 'c' selects the clipboard
    write!(writer, "\x1b]52;c;{}\x07", encoded)?;
    writer.flush()
}

/// Per-instance copy confirmation state.
///
/// Each copy affordance owns one indicator; nothing is shared between
/// blocks. After [`CopyIndicator::mark`] the indicator reads as copied
/// for [`COPIED_WINDOW`], then reverts on its own.
#[derive(Debug, Clone, Default)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful copy at time `now`.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the confirmation is still within its window.
    pub fn is_copied(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < COPIED_WINDOW,
            None => false,
        }
    }

    /// Drop the confirmation immediately.
    pub fn reset(&mut self) {
        self.copied_at = None;
    }
}
