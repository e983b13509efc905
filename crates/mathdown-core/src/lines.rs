//! Diff-line pre-pass for code blocks.
//!
//! A line whose first character is `+`, `-`, or `>` carries a style
//! directive; the marker is stripped and the remainder's leading
//! whitespace trimmed before display. The pre-pass runs over the full
//! text before any animation starts, and is recomputed per line during
//! animation so partially revealed text matches the final result.

use crate::enums::LineStyle;

/// Classify one physical line and strip its marker.
///
/// Returns the style directive plus the display text. Lines without a
/// marker are returned unmodified.
///
/// # Example
///
/// ```
/// use mathdown_core::{classify_line, LineStyle};
///
/// assert_eq!(classify_line("+  foo"), (LineStyle::Addition, "foo"));
/// assert_eq!(classify_line("plain"), (LineStyle::Plain, "plain"));
/// ```
pub fn classify_line(line: &str) -> (LineStyle, &str) {
    let style = match line.as_bytes().first() {
        Some(b'+') => LineStyle::Addition,
        Some(b'-') => LineStyle::Deletion,
        Some(b'>') => LineStyle::Highlight,
        _ => return (LineStyle::Plain, line),
    };
    (style, line[1..].trim_start())
}

/// Strip style markers from every line of a block.
///
/// This is the text the typing scheduler reveals: styles are reapplied
/// per line at display time, the markers themselves never show.
pub fn strip_line_markers(text: &str) -> String {
    text.split('\n')
        .map(|line| classify_line(line).1)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify_line("+foo"), (LineStyle::Addition, "foo"));
        assert_eq!(classify_line("-bar"), (LineStyle::Deletion, "bar"));
        assert_eq!(classify_line(">baz"), (LineStyle::Highlight, "baz"));
    }

    #[test]
    fn test_classify_trims_leading_whitespace() {
        assert_eq!(classify_line("+    let x = 1;"), (LineStyle::Addition, "let x = 1;"));
    }

    #[test]
    fn test_classify_plain_lines_untouched() {
        assert_eq!(classify_line("  indented"), (LineStyle::Plain, "  indented"));
        assert_eq!(classify_line(""), (LineStyle::Plain, ""));
        // Marker chars not in first position do not count
        assert_eq!(classify_line("a + b"), (LineStyle::Plain, "a + b"));
    }

    #[test]
    fn test_strip_three_line_block() {
        assert_eq!(strip_line_markers("+foo\n-bar\n>baz"), "foo\nbar\nbaz");
    }

    #[test]
    fn test_strip_preserves_line_count() {
        let text = "+a\n\nplain\n-b";
        let stripped = strip_line_markers(text);
        assert_eq!(stripped.split('\n').count(), text.split('\n').count());
        assert_eq!(stripped, "a\n\nplain\nb");
    }
}
