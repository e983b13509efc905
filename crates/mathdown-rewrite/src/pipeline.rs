//! The ordered math-annotation rewrite pipeline.
//!
//! Passes run strictly in sequence; each operates on the committed
//! output of the previous one. The order is a hard contract: structural
//! patterns (fractions, roots, bounds) must consume their braces before
//! the generic sub/superscript passes, the indexed root must run before
//! the plain one, and the macro sweep runs last so it never corrupts
//! attributes of already-built markup.

use crate::symbols::sweep_macros;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Rewrite all recognized math constructs to inline HTML fragments.
///
/// Total and deterministic: unmatched patterns are left verbatim, and
/// the function is idempotent on its own output.
pub fn rewrite_math(content: &str) -> String {
    let mut s = rewrite_fractions(content);
    s = rewrite_roots(&s);
    s = rewrite_integrals(&s);
    s = rewrite_limits(&s);
    s = rewrite_sums(&s);
    s = rewrite_scripts(&s);
    s = rewrite_matrices(&s);
    s = rewrite_mentions(&s);
    s = rewrite_percentages(&s);
    s = rewrite_powers(&s);
    s = rewrite_subscript_vars(&s);
    s = rewrite_scientific(&s);
    s = rewrite_sum_alias(&s);
    s = rewrite_subscript_pairs(&s);
    s = s.replace("\\times", "×");
    s = rewrite_inline_math(&s);
    s = pass_table_rows(&s);
    s = sweep_macros(&s);
    s = rewrite_block_math(&s);
    s = pass_array_literals(&s);
    s = rewrite_subscript_digits(&s);
    s = rewrite_powers_of_ten(&s);
    s = rewrite_subscript_capitals(&s);
    s
}

/// Step 1: `\frac{a}{b}` → stacked numerator/denominator fragment.
/// Each argument tolerates one level of nested braces so braced
/// scripts like `y^{2}` stay inside the fragment for step 6.
fn rewrite_fractions(input: &str) -> String {
    static FRACTION: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\\frac\{((?:[^{}]|\{[^{}]*\})+)\}\{((?:[^{}]|\{[^{}]*\})+)\}").unwrap()
    });

    FRACTION
        .replace_all(
            input,
            r#"<span class="math-frac"><span class="num">${1}</span><span class="den">${2}</span></span>"#,
        )
        .to_string()
}

/// Step 2: `\sqrt[n]{x}` first, then plain `\sqrt{x}`. The indexed form
/// must run first or its bracket would survive the simpler pattern.
fn rewrite_roots(input: &str) -> String {
    static NTH_ROOT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\sqrt\[([^\]]+)\]\{([^}]+)\}").unwrap());
    static SQRT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\sqrt\{([^}]+)\}").unwrap());

    let s = NTH_ROOT.replace_all(
        input,
        r#"<span class="math-root"><sup>${1}</sup>√<span class="radicand">${2}</span></span>"#,
    );
    SQRT.replace_all(
        &s,
        r#"<span class="math-sqrt">√<span class="radicand">${1}</span></span>"#,
    )
    .to_string()
}

/// Step 3: `\int_{a}^{b}` → integral with bounds.
fn rewrite_integrals(input: &str) -> String {
    static INTEGRAL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\int_\{([^}]+)\}\^\{([^}]+)\}").unwrap());

    INTEGRAL
        .replace_all(
            input,
            r#"<span class="math-integral">∫<sub>${1}</sub><sup>${2}</sup></span>"#,
        )
        .to_string()
}

/// Step 4: `\lim_{expr}` → limit with subscript expression.
fn rewrite_limits(input: &str) -> String {
    static LIMIT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\lim_\{([^}]+)\}").unwrap());

    LIMIT
        .replace_all(input, r#"<span class="math-limit">lim<sub>${1}</sub></span>"#)
        .to_string()
}

static SUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\sum_\{([^}]+)\}\^\{([^}]+)\}").unwrap());

const SUM_FRAGMENT: &str =
    r#"<span class="math-sum">Σ<sub>${1}</sub><sup>${2}</sup></span>"#;

/// Step 5: `\sum_{a}^{b}` → summation with bounds.
fn rewrite_sums(input: &str) -> String {
    SUM.replace_all(input, SUM_FRAGMENT).to_string()
}

/// Step 13: alias of step 5, kept for inputs that reach this stage
/// unconverted. A no-op on step 5's own output.
fn rewrite_sum_alias(input: &str) -> String {
    SUM.replace_all(input, SUM_FRAGMENT).to_string()
}

/// Step 6: generic `^{x}` and `_{x}`. Must run after the structural
/// passes above so their captures are not pre-empted.
fn rewrite_scripts(input: &str) -> String {
    static SUPERSCRIPT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\^\{([^}]+)\}").unwrap());
    static SUBSCRIPT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"_\{([^}]+)\}").unwrap());

    let s = SUPERSCRIPT.replace_all(input, "<sup>${1}</sup>");
    SUBSCRIPT.replace_all(&s, "<sub>${1}</sub>").to_string()
}

/// Step 7: matrix block → table, rows split on `\\`, cells on `&`.
/// Each row carries a synthetic key derived from its index.
fn rewrite_matrices(input: &str) -> String {
    static MATRIX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\\begin\{matrix\}(.*?)\\end\{matrix\}").unwrap());

    MATRIX
        .replace_all(input, |caps: &Captures| {
            let rows: String = caps[1]
                .trim()
                .split("\\\\")
                .enumerate()
                .map(|(ix, row)| {
                    let cells: String = row
                        .trim()
                        .split('&')
                        .map(|cell| format!("<td>{}</td>", cell.trim()))
                        .collect();
                    format!(r#"<tr data-key="row-{ix}">{cells}</tr>"#)
                })
                .collect();
            format!(r#"<table class="math-matrix"><tbody>{rows}</tbody></table>"#)
        })
        .to_string()
}

/// Step 8: `[user:NAME]` → styled mention span.
fn rewrite_mentions(input: &str) -> String {
    static USER_MENTION: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\[user:([^\]]+)\]").unwrap());

    USER_MENTION
        .replace_all(input, r#"<span class="user-mention">@${1}</span>"#)
        .to_string()
}

/// Step 9: `N\%` → `N%`.
fn rewrite_percentages(input: &str) -> String {
    static PERCENTAGE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d+)\\%").unwrap());

    PERCENTAGE.replace_all(input, "${1}%").to_string()
}

/// Step 10: exponent shorthand, braced form first so the unbraced
/// pattern cannot truncate at the first digit run.
fn rewrite_powers(input: &str) -> String {
    static POWER_BRACED: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d+)\^\{(\d+)\}").unwrap());
    static POWER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d+)\^(\d+)").unwrap());

    let s = POWER_BRACED.replace_all(input, "${1}<sup>${2}</sup>");
    POWER.replace_all(&s, "${1}<sup>${2}</sup>").to_string()
}

/// Step 11: `letter_k` shorthand for the small mapped index set.
/// Unmapped indices are left untouched for the later digit pass.
fn rewrite_subscript_vars(input: &str) -> String {
    static SUBSCRIPT_VAR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"([a-z])_([1-9i-n])").unwrap());

    SUBSCRIPT_VAR
        .replace_all(input, |caps: &Captures| {
            let glyph = match &caps[2] {
                "1" => "₁",
                "2" => "₂",
                "i" => "ᵢ",
                "n" => "ₙ",
                _ => return caps[0].to_string(),
            };
            format!("{}{}", &caps[1], glyph)
        })
        .to_string()
}

/// Step 12: `\cdot 10^{n}` → `·10` with superscript n.
fn rewrite_scientific(input: &str) -> String {
    static SCI_NOTATION: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\cdot 10\^\{(\d+)\}").unwrap());

    SCI_NOTATION.replace_all(input, "·10<sup>${1}</sup>").to_string()
}

/// Step 14: `_{(i,j)}` → subscript wrapping the pair verbatim.
fn rewrite_subscript_pairs(input: &str) -> String {
    static SUBSCRIPT_PAIR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"_\{(\([^)]+\))\}").unwrap());

    SUBSCRIPT_PAIR.replace_all(input, "<sub>${1}</sub>").to_string()
}

/// Step 16: `~expr~` inline math. Contents run through a local
/// sub-pipeline, simpler than the outer passes, and the delimiters are
/// stripped.
fn rewrite_inline_math(input: &str) -> String {
    static INLINE_MATH: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"~([^~]+)~").unwrap());
    static INLINE_POWER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d+)\^\{(\d+)\}").unwrap());
    static INLINE_SUB: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"a_([1-9i-n])").unwrap());

    INLINE_MATH
        .replace_all(input, |caps: &Captures| {
            let expr = INLINE_POWER.replace_all(&caps[1], "${1}<sup>${2}</sup>");
            let expr = expr.replace("\\le", "≤").replace("\\dots", "…");
            INLINE_SUB.replace_all(&expr, "a<sub>${1}</sub>").to_string()
        })
        .to_string()
}

/// Step 17: markdown table rows pass through unchanged. Placeholder
/// asserting that table syntax is never consumed by numeric patterns.
fn pass_table_rows(input: &str) -> String {
    static TABLE_ROW: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\|([^\n]+)\|").unwrap());

    TABLE_ROW
        .replace_all(input, |caps: &Captures| caps[0].to_string())
        .to_string()
}

/// Step 19: `$$…$$` block math. Focused sub-pipeline, then a block
/// container around the trimmed result.
fn rewrite_block_math(input: &str) -> String {
    static BLOCK_MATH: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());
    static BLOCK_PAIR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"_\{(\([^)]+\))\}").unwrap());

    BLOCK_MATH
        .replace_all(input, |caps: &Captures| {
            let expr = caps[1].trim();
            let expr = SUM.replace_all(expr, SUM_FRAGMENT);
            let expr = BLOCK_PAIR.replace_all(&expr, "<sub>${1}</sub>");
            let expr = expr.replace("\\leq", "≤");
            format!(r#"<div class="block-math">{expr}</div>"#)
        })
        .to_string()
}

/// Step 20: bracketed array literals pass through unchanged.
/// Placeholder documenting the intent to special-case arrays.
fn pass_array_literals(input: &str) -> String {
    static ARRAY_LITERAL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"a=\[([^\]]+)\]").unwrap());

    ARRAY_LITERAL.replace_all(input, "a=[${1}]").to_string()
}

/// Step 21: bare digit subscripts left over after step 11's mapped set.
fn rewrite_subscript_digits(input: &str) -> String {
    static SUBSCRIPT_NUM: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"([a-z])_(\d+)").unwrap());

    SUBSCRIPT_NUM.replace_all(input, "${1}<sub>${2}</sub>").to_string()
}

/// Step 22: standalone `10^{n}`. Idempotent against step 10's output,
/// which only fires on digit-adjacent exponents.
fn rewrite_powers_of_ten(input: &str) -> String {
    static POWER_OF_TEN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"10\^\{([^}]+)\}").unwrap());

    POWER_OF_TEN.replace_all(input, "10<sup>${1}</sup>").to_string()
}

/// Step 23: capitalized single-letter subscripts, mapped to the small
/// pre-composed glyph set with an explicit `<sub>` fallback.
fn rewrite_subscript_capitals(input: &str) -> String {
    static SUBSCRIPT_CAP: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"([a-z])_([A-Z])").unwrap());

    SUBSCRIPT_CAP
        .replace_all(input, |caps: &Captures| {
            let glyph = match &caps[2] {
                "N" => "ₙ",
                "I" => "ᵢ",
                "J" => "ⱼ",
                "K" => "ₖ",
                "M" => "ₘ",
                other => return format!("{}<sub>{}</sub>", &caps[1], other),
            };
            format!("{}{}", &caps[1], glyph)
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_structure() {
        let out = rewrite_math(r"\frac{1}{2}");
        assert_eq!(
            out,
            r#"<span class="math-frac"><span class="num">1</span><span class="den">2</span></span>"#
        );
    }

    #[test]
    fn test_indexed_root_before_plain_root() {
        let indexed = rewrite_math(r"\sqrt[3]{8}");
        assert!(indexed.contains("<sup>3</sup>√"));
        assert!(indexed.contains(r#"class="math-root""#));

        let plain = rewrite_math(r"\sqrt{8}");
        assert!(plain.contains(r#"class="math-sqrt""#));
        assert!(!plain.contains("math-root"));
    }

    #[test]
    fn test_integral_bounds() {
        let out = rewrite_math(r"\int_{0}^{1}");
        assert_eq!(
            out,
            r#"<span class="math-integral">∫<sub>0</sub><sup>1</sup></span>"#
        );
    }

    #[test]
    fn test_limit() {
        let out = rewrite_math(r"\lim_{x \to 0}");
        assert!(out.starts_with(r#"<span class="math-limit">lim<sub>"#));
    }

    #[test]
    fn test_sum_bounds() {
        let out = rewrite_math(r"\sum_{i=1}^{n}");
        assert!(out.contains("Σ<sub>i=1</sub><sup>n</sup>"));
    }

    #[test]
    fn test_sum_alias_is_noop_after_primary_pass() {
        let once = rewrite_sums(r"before \sum_{a}^{b} after");
        assert_eq!(rewrite_sum_alias(&once), once);
    }

    #[test]
    fn test_generic_scripts_run_after_structural_passes() {
        let out = rewrite_math(r"\frac{x_1}{y^{2}}");
        assert!(out.contains(r#"<span class="num">x₁</span>"#));
        assert!(out.contains(r#"<span class="den">y<sup>2</sup></span>"#));
    }

    #[test]
    fn test_fraction_arguments_keep_braced_scripts() {
        let out = rewrite_fractions(r"\frac{a^{2}}{b_{1}}");
        assert_eq!(
            out,
            r#"<span class="math-frac"><span class="num">a^{2}</span><span class="den">b_{1}</span></span>"#
        );
    }

    #[test]
    fn test_matrix_rows_and_keys() {
        let out = rewrite_math(r"\begin{matrix} 1 & 2 \\ 3 & 4 \end{matrix}");
        assert!(out.contains(r#"<table class="math-matrix">"#));
        assert!(out.contains(r#"<tr data-key="row-0"><td>1</td><td>2</td></tr>"#));
        assert!(out.contains(r#"<tr data-key="row-1"><td>3</td><td>4</td></tr>"#));
    }

    #[test]
    fn test_user_mention() {
        assert_eq!(
            rewrite_math("[user:ada]"),
            r#"<span class="user-mention">@ada</span>"#
        );
    }

    #[test]
    fn test_percentage() {
        assert_eq!(rewrite_math(r"50\% done"), "50% done");
    }

    #[test]
    fn test_powers_braced_and_bare() {
        assert_eq!(rewrite_math("10^{6}"), "10<sup>6</sup>");
        assert_eq!(rewrite_math("10^6"), "10<sup>6</sup>");
    }

    #[test]
    fn test_subscript_var_mapped_and_unmapped() {
        assert_eq!(rewrite_math("a_1"), "a₁");
        assert_eq!(rewrite_math("a_i"), "aᵢ");
        // 5 is outside the mapped set; the bare-digit rule picks it up
        assert_eq!(rewrite_math("a_5"), "a<sub>5</sub>");
    }

    #[test]
    fn test_scientific_notation() {
        // The generic script pass converts `^{8}` before the dedicated
        // pattern sees it, so the macro sweep supplies the dot and the
        // original spacing survives.
        assert_eq!(rewrite_math(r"3\cdot 10^{8}"), "3· 10<sup>8</sup>");
    }

    #[test]
    fn test_subscript_pair() {
        assert_eq!(rewrite_math("M_{(i,j)}"), "M<sub>(i,j)</sub>");
    }

    #[test]
    fn test_times_macro() {
        assert_eq!(rewrite_math(r"n \times m"), "n × m");
    }

    #[test]
    fn test_inline_math_sub_pipeline() {
        let out = rewrite_math(r"~1 \le 10^{6} \dots a_3~");
        assert_eq!(out, "1 ≤ 10<sup>6</sup> … a<sub>3</sub>");
    }

    #[test]
    fn test_table_rows_pass_through() {
        let row = "| a_x | 10 |";
        assert_eq!(pass_table_rows(row), row);
    }

    #[test]
    fn test_block_math_container() {
        let out = rewrite_math(r"$$ x_{(1,2)} \leq y $$");
        assert!(out.starts_with(r#"<div class="block-math">"#));
        assert!(out.contains("<sub>(1,2)</sub>"));
        assert!(out.contains("≤"));
        assert!(out.ends_with("</div>"));
    }

    #[test]
    fn test_array_literal_untouched() {
        assert_eq!(rewrite_math("a=[1,2,3]"), "a=[1,2,3]");
    }

    #[test]
    fn test_capital_subscripts() {
        assert_eq!(rewrite_math("a_N"), "aₙ");
        assert_eq!(rewrite_math("b_I"), "bᵢ");
        // Outside the pre-composed set: explicit tag fallback
        assert_eq!(rewrite_math("b_Q"), "b<sub>Q</sub>");
    }

    #[test]
    fn test_unmatched_input_left_verbatim() {
        assert_eq!(rewrite_math("plain prose, no math"), "plain prose, no math");
        assert_eq!(rewrite_math(r"\frac{unclosed"), r"\frac{unclosed");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            r"\frac{x_1}{y^{2}} and \sqrt[3]{8}",
            r"\sum_{i=1}^{n} x_i \leq 10^{9}",
            r"~1 \le a_2~ and [user:bob] at 50\%",
            r"\begin{matrix} 1 & 2 \\ 3 & 4 \end{matrix}",
            r"$$ s_{(i,j)} \leq n $$",
        ];
        for input in inputs {
            let once = rewrite_math(input);
            assert_eq!(rewrite_math(&once), once, "not idempotent for {input:?}");
        }
    }
}
