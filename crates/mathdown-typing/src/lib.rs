//! Mathdown Typing
//!
//! The typing-animation scheduler: a cooperative, cancelable state
//! machine that reveals a code block's text one unit (character or
//! line) at a time.
//!
//! A [`TypingSession`] never blocks and owns no platform timer. It
//! carries a single pending deadline; the driver asks for it via
//! [`TypingSession::next_deadline`], sleeps however it likes, then
//! calls [`TypingSession::poll`]. Ticks are strictly sequential: one
//! `poll` applies at most one tick, and a new deadline exists only
//! after the previous tick's effect is committed. Dropping the session
//! or replacing its text cancels the pending tick synchronously; a
//! stale deadline can never mutate a restarted session.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use mathdown_core::TypingOptions;
//! use mathdown_typing::TypingSession;
//!
//! let opts = TypingOptions { enabled: true, speed_ms: 10, ..Default::default() };
//! let t0 = Instant::now();
//! let mut session = TypingSession::new("hi", &opts, t0);
//! assert_eq!(session.revealed(), "");
//!
//! session.poll(t0 + Duration::from_millis(10));
//! assert_eq!(session.revealed(), "h");
//! ```

use mathdown_core::{strip_line_markers, TypeMode, TypingOptions};
use std::time::{Duration, Instant};

/// Lifecycle phase of a typing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not animating; the full text is shown
    Idle,
    /// Revealing units on a timer
    Running,
    /// A pass finished and a replay is pending
    LoopWait,
    /// A pass finished and no replay is configured
    Complete,
}

/// One typing animation over one code block's text.
///
/// The text is marker-stripped up front (the diff-line pre-pass), so
/// the revealed prefix always matches what the final render shows.
#[derive(Debug, Clone)]
pub struct TypingSession {
    /// Marker-stripped text being revealed
    text: String,
    /// Byte offset at which each reveal unit ends
    unit_ends: Vec<usize>,
    opts: TypingOptions,
    /// Units revealed in the current pass
    revealed: usize,
    /// Completed-pass counter; increments on each replay
    pass: usize,
    phase: Phase,
    /// The single pending tick. `None` means nothing is scheduled.
    deadline: Option<Instant>,
}

impl TypingSession {
    /// Create a session for `raw_text` at time `now`.
    ///
    /// With typing disabled or empty text the session is Idle and
    /// reveals everything immediately; no tick is ever scheduled.
    pub fn new(raw_text: &str, opts: &TypingOptions, now: Instant) -> Self {
        let text = strip_line_markers(raw_text);
        let unit_ends = unit_ends(&text, opts.mode);

        if !opts.enabled || text.is_empty() {
            let total = unit_ends.len();
            return Self {
                text,
                unit_ends,
                opts: opts.clone(),
                revealed: total,
                pass: 0,
                phase: Phase::Idle,
                deadline: None,
            };
        }

        Self {
            text,
            unit_ends,
            opts: opts.clone(),
            revealed: 0,
            pass: 0,
            phase: Phase::Running,
            deadline: Some(now + tick_delay(opts)),
        }
    }

    /// The currently revealed prefix.
    pub fn revealed(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.text[..self.unit_ends[n - 1]],
        }
    }

    /// The full marker-stripped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a pass is actively revealing.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Number of completed passes before the current one.
    pub fn pass(&self) -> usize {
        self.pass
    }

    /// The pending tick's deadline, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Apply at most one due tick.
    ///
    /// Returns true when a tick fired. Calling early is a no-op;
    /// calling late fires only the single pending tick, never a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        match self.phase {
            Phase::Running => {
                self.revealed += 1;
                if self.revealed >= self.unit_ends.len() {
                    self.revealed = self.unit_ends.len();
                    self.finish_pass(now);
                } else {
                    self.deadline = Some(now + tick_delay(&self.opts));
                }
                true
            }
            Phase::LoopWait => {
                self.pass += 1;
                self.revealed = 0;
                self.phase = Phase::Running;
                self.deadline = Some(now + tick_delay(&self.opts));
                true
            }
            // Idle/Complete never hold a deadline
            _ => false,
        }
    }

    /// Cancel the pending tick and stop the session.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.deadline = None;
    }

    /// Replace the source text: cancels the pending tick and restarts
    /// the whole session from scratch. Never resumes stale state.
    pub fn set_text(&mut self, raw_text: &str, now: Instant) {
        *self = Self::new(raw_text, &self.opts.clone(), now);
    }

    /// Replace the typing options: cancels the pending tick and
    /// restarts with the current text.
    pub fn set_options(&mut self, opts: &TypingOptions, now: Instant) {
        // Reveal already-stripped text; stripping is idempotent
        let text = self.text.clone();
        *self = Self::new(&text, opts, now);
    }

    fn finish_pass(&mut self, now: Instant) {
        match self.opts.loop_setting.delay_ms(self.opts.delay_ms) {
            Some(delay_ms) => {
                self.phase = Phase::LoopWait;
                self.deadline = Some(now + Duration::from_millis(delay_ms));
            }
            None => {
                self.phase = Phase::Complete;
                self.deadline = None;
            }
        }
    }
}

/// Per-tick delay for the configured mode. Line reveals read as
/// deliberately slower chunks than per-character ticks.
fn tick_delay(opts: &TypingOptions) -> Duration {
    Duration::from_millis(opts.tick_ms())
}

/// Byte offset at which each reveal unit ends.
fn unit_ends(text: &str, mode: TypeMode) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    match mode {
        TypeMode::Char => text
            .char_indices()
            .map(|(ix, c)| ix + c.len_utf8())
            .collect(),
        TypeMode::Line => {
            let mut ends = Vec::new();
            let mut offset = 0;
            for line in text.split('\n') {
                offset += line.len();
                ends.push(offset);
                offset += 1; // the '\n' itself, revealed with the next line
            }
            ends
        }
    }
}
