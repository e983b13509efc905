//! Mathdown Rewrite
//!
//! The ordered text-rewrite pipeline: a fence normalizer pre-pass plus a
//! multi-pass pattern rewriter that converts a closed math/annotation
//! vocabulary into inline HTML fragments.
//!
//! Both passes are total functions over arbitrary strings: malformed or
//! unrecognized input is left verbatim, never reported.
//!
//! # Supported conversions
//!
//! - Fractions: `\frac{a}{b}` → stacked numerator/denominator fragment
//! - Roots: `\sqrt[n]{x}`, `\sqrt{x}` → radical fragments
//! - Integrals, limits, sums: bound-carrying fragments
//! - Sub/superscripts: `_{x}`, `^{x}`, `a_1`, `10^6`, `a_N`
//! - Matrices: `\begin{matrix} … \end{matrix}` → table fragment
//! - Inline (`~…~`) and block (`$$…$$`) math with local sub-pipelines
//! - A macro sweep over a fixed glyph table (Greek letters, operators,
//!   comparisons, set symbols, ellipses)
//!
//! # Example
//!
//! ```
//! use mathdown_rewrite::rewrite_math;
//!
//! let html = rewrite_math(r"\frac{1}{2}");
//! assert!(html.contains(r#"<span class="num">1</span>"#));
//! ```

mod normalize;
mod pipeline;
mod symbols;

pub use normalize::normalize_fences;
pub use pipeline::rewrite_math;
pub use symbols::MACRO_GLYPHS;

/// Run the full pre-parse rewrite: fence normalization, then math
/// rewriting. This is the string handed to the Markdown parser.
pub fn preprocess(content: &str) -> String {
    rewrite_math(&normalize_fences(content))
}
