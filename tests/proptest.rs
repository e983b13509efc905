//! Property-based tests for mathdown.
//!
//! These use proptest to generate random inputs and verify the
//! totality and stability guarantees: the rewriter and normalizer
//! never fail on arbitrary strings, the rewriter is idempotent on its
//! own output, and the typing scheduler's reveal is monotone.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use mathdown_core::{strip_line_markers, TypeMode, TypingOptions};
use mathdown_render::{HtmlRenderer, RenderOptions};
use mathdown_rewrite::{normalize_fences, rewrite_math};
use mathdown_typing::TypingSession;

/// One renderer for every case; building syntax definitions per case
/// would dominate the run time.
static RENDERER: LazyLock<HtmlRenderer> =
    LazyLock::new(|| HtmlRenderer::new(RenderOptions::default()));

/// Arbitrary printable text, newlines and tabs included.
fn any_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Text that can carry math annotations but no backtick fences.
fn mathy_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 \n^_{}\\~$.]*").unwrap()
}

/// Fence body: anything printable except backticks.
fn fence_body() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n&&[^`]]{0,80}").unwrap()
}

/// Prose with no backticks and no trailing newline.
fn prose() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 .,]{0,40}").unwrap()
}

proptest! {
    /// The rewriter is total over arbitrary strings.
    #[test]
    fn rewriter_never_panics(input in any_text()) {
        let _ = rewrite_math(&input);
    }

    /// The rewriter is total over unicode, not just ASCII.
    #[test]
    fn rewriter_never_panics_on_unicode(input in "\\PC*") {
        let _ = rewrite_math(&input);
    }

    /// Applying the rewriter to its own output changes nothing.
    #[test]
    fn rewriter_idempotent_on_own_output(input in mathy_text()) {
        let once = rewrite_math(&input);
        prop_assert_eq!(rewrite_math(&once), once);
    }

    /// The normalizer is total and pure.
    #[test]
    fn normalizer_never_panics(input in any_text()) {
        let _ = normalize_fences(&input);
    }

    /// Text without fences passes through the normalizer unchanged.
    #[test]
    fn normalizer_noop_without_fences(input in prose()) {
        prop_assert_eq!(normalize_fences(&input), input);
    }

    /// A fence with no surrounding blank lines gets exactly one on
    /// each side.
    #[test]
    fn normalizer_isolates_unspaced_fences(
        before in prose(),
        body in fence_body(),
        after in prose(),
    ) {
        let input = format!("{before}\n```{body}```{after}");
        let out = normalize_fences(&input);
        let fence = format!("\n\n```{body}```\n\n");
        prop_assert!(out.contains(&fence));
        let overspaced = format!("\n\n\n```{body}");
        prop_assert!(!out.contains(&overspaced));
    }

    /// The full render pipeline never panics and always produces
    /// something for non-empty input.
    #[test]
    fn render_never_panics(input in any_text()) {
        let _ = RENDERER.render(&input);
    }

    /// Marker stripping preserves line count.
    #[test]
    fn strip_markers_preserves_line_count(input in any_text()) {
        let stripped = strip_line_markers(&input);
        prop_assert_eq!(
            stripped.split('\n').count(),
            input.split('\n').count()
        );
    }

    /// Scheduler reveal length is monotone within a pass, bounded by
    /// the text length, and reaches the full text in char mode.
    #[test]
    fn scheduler_reveal_is_monotone(
        text in "[a-zA-Z0-9 \n]{1,40}",
        speed_ms in 1u64..50,
        line_mode in any::<bool>(),
    ) {
        let opts = TypingOptions {
            enabled: true,
            speed_ms,
            mode: if line_mode { TypeMode::Line } else { TypeMode::Char },
            ..Default::default()
        };
        let t0 = Instant::now();
        let mut session = TypingSession::new(&text, &opts, t0);

        let mut now = t0;
        let mut last = 0;
        while let Some(deadline) = session.next_deadline() {
            now = deadline.max(now);
            prop_assert!(session.poll(now));
            let len = session.revealed().len();
            prop_assert!(len >= last);
            prop_assert!(len <= session.text().len());
            last = len;
        }

        prop_assert_eq!(session.revealed(), session.text());
    }

    /// A text change cancels the pending tick; polling the stale
    /// deadline mutates nothing.
    #[test]
    fn scheduler_cancellation_is_synchronous(
        first in "[a-z]{1,20}",
        second in "[a-z]{1,20}",
        speed_ms in 5u64..50,
    ) {
        let opts = TypingOptions {
            enabled: true,
            speed_ms,
            ..Default::default()
        };
        let t0 = Instant::now();
        let mut session = TypingSession::new(&first, &opts, t0);
        let stale = session.next_deadline().unwrap();

        session.set_text(&second, t0 + Duration::from_millis(1));
        prop_assert!(!session.poll(stale));
        prop_assert_eq!(session.revealed(), "");
        prop_assert_eq!(session.text(), second.as_str());
    }
}
