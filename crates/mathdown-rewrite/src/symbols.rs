//! Fixed macro-to-glyph table for the final sweep.

/// Ordered list of (macro literal, replacement glyph) pairs.
///
/// Swept one macro at a time over the whole string after all structural
/// patterns have run. Replacements are glyphs, never macro syntax, so no
/// entry can re-trigger another. Longer macros sit before their prefixes
/// (`\leq` before `\le`, `\cdots` before `\cdot`) so a single global
/// sweep never truncates a match.
pub const MACRO_GLYPHS: &[(&str, &str)] = &[
    // Basic operators
    ("\\plus", "+"),
    ("\\minus", "−"),
    ("\\times", "×"),
    ("\\div", "÷"),
    ("\\pm", "±"),
    // Comparisons
    ("\\eq", "="),
    ("\\neq", "≠"),
    ("\\lt", "<"),
    ("\\gt", ">"),
    ("\\leq", "≤"),
    ("\\geq", "≥"),
    ("\\approx", "≈"),
    // Special symbols
    ("\\infty", "∞"),
    ("\\partial", "∂"),
    ("\\nabla", "∇"),
    ("\\exists", "∃"),
    ("\\forall", "∀"),
    ("\\in", "∈"),
    ("\\notin", "∉"),
    // Set operators
    ("\\cup", "∪"),
    ("\\cap", "∩"),
    ("\\subset", "⊂"),
    ("\\supset", "⊃"),
    // Greek letters
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\gamma", "γ"),
    ("\\delta", "Δ"),
    ("\\theta", "θ"),
    ("\\pi", "π"),
    ("\\sigma", "σ"),
    ("\\omega", "ω"),
    // Ellipses and dots
    ("\\ldots", "…"),
    ("\\cdots", "⋯"),
    ("\\vdots", "⋮"),
    ("\\ddots", "⋱"),
    ("\\cdot", "·"),
    ("\\dots", "…"),
    ("\\le", "≤"),
    // Digit subscripts
    ("_1", "₁"),
    ("_2", "₂"),
    ("_i", "ᵢ"),
    ("_n", "ₙ"),
    // Summation operator (bound-carrying forms were consumed earlier)
    ("\\sum", "Σ"),
];

/// Substitute every macro in [`MACRO_GLYPHS`], one at a time.
pub fn sweep_macros(input: &str) -> String {
    let mut result = input.to_string();
    for (macro_token, glyph) in MACRO_GLYPHS {
        if result.contains(macro_token) {
            result = result.replace(macro_token, glyph);
        }
    }
    result
}
