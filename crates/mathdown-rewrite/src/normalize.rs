//! Fence isolation pre-pass.
//!
//! The downstream Markdown parser only recognizes a triple-backtick
//! fence when it is isolated by blank lines, which converted documents
//! frequently omit. This pass rewrites every fenced block so it has a
//! blank line on each side. Nothing else is touched.

use regex::Regex;
use std::sync::LazyLock;

/// Matches an entire fenced code block, including the closing fence.
/// The body may not contain backticks, mirroring the fence grammar.
static FENCE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\n)```([^`]*?)```").unwrap());

/// Surround every fenced code block with blank lines.
///
/// Pure; input without fences is returned unchanged apart from the
/// allocation.
///
/// # Example
///
/// ```
/// use mathdown_rewrite::normalize_fences;
///
/// let out = normalize_fences("intro\n```rs\nlet x = 1;\n```next");
/// assert!(out.contains("intro\n\n```rs"));
/// assert!(out.contains("```\n\nnext"));
/// ```
pub fn normalize_fences(content: &str) -> String {
    FENCE_BLOCK
        .replace_all(content, "\n\n```${2}```\n\n")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_blank_lines_around_fence() {
        let out = normalize_fences("text\n```py\nprint(1)\n```after");
        assert_eq!(out, "text\n\n```py\nprint(1)\n```\n\nafter");
    }

    #[test]
    fn test_fence_at_start_of_input() {
        let out = normalize_fences("```\ncode\n```");
        assert!(out.starts_with("\n\n```"));
        assert!(out.ends_with("```\n\n"));
    }

    #[test]
    fn test_no_fence_is_a_noop() {
        assert_eq!(normalize_fences("just text\nno fences"), "just text\nno fences");
    }

    #[test]
    fn test_multiple_fences() {
        let out = normalize_fences("a\n```\none\n```b\n```\ntwo\n```c");
        assert_eq!(out.matches("\n\n```").count(), 2);
        assert_eq!(out.matches("```\n\n").count(), 2);
    }

    #[test]
    fn test_exactly_one_blank_line_when_none_present() {
        let out = normalize_fences("before\n```\nx\n```\nafter");
        assert!(out.contains("before\n\n```"));
        assert!(!out.contains("before\n\n\n"));
    }
}
