//! Stylesheet for standalone output.

use crate::Highlighter;
use mathdown_core::Result;

/// Document styles covering every class the renderer emits.
pub const DOCUMENT_CSS: &str = r#"
body {
  max-width: 48rem;
  margin: 2rem auto;
  padding: 0 1rem;
  font-family: system-ui, sans-serif;
  line-height: 1.6;
  color: #24292f;
}

.heading { display: flex; align-items: center; gap: 0.5rem; }
.heading-icon { color: #6366f1; font-size: 0.8em; }

.quote {
  margin: 1rem 0;
  padding: 0.25rem 1rem;
  border-left: 4px solid #d0d7de;
  color: #57606a;
}

.link-internal { color: #0969da; }
.link-external { color: #0969da; }
.external-link-icon { font-size: 0.75em; margin-left: 0.15em; }

.inline-code {
  padding: 0.1em 0.35em;
  border-radius: 4px;
  background: #f0f1f3;
  font-family: ui-monospace, monospace;
  font-size: 0.9em;
}

.code-block {
  margin: 1rem 0;
  border: 1px solid #30363d;
  border-radius: 8px;
  overflow: hidden;
  background: #2b303b;
}
.code-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.4rem 0.75rem;
  background: #21252e;
}
.code-dots { display: inline-flex; gap: 0.3rem; }
.dot {
  width: 0.65rem;
  height: 0.65rem;
  border-radius: 50%;
  background: #4b5263;
}
.code-language { color: #9da5b4; font-size: 0.8rem; }
.copy-button {
  margin-left: auto;
  padding: 0.15rem 0.6rem;
  border: 1px solid #4b5263;
  border-radius: 4px;
  background: transparent;
  color: #9da5b4;
  font-size: 0.75rem;
  cursor: pointer;
}
.copy-button.copied { color: #98c379; border-color: #98c379; }

.code-body {
  margin: 0;
  padding: 0.75rem;
  overflow-x: auto;
  font-family: ui-monospace, monospace;
  font-size: 0.85rem;
  line-height: 1.5;
  color: #c0c5ce;
}
.code-line { display: block; }
.line-number {
  display: inline-block;
  width: 2.5em;
  margin-right: 0.75em;
  color: #4b5263;
  text-align: right;
  user-select: none;
}
.line-add { background: rgba(152, 195, 121, 0.15); }
.line-del { background: rgba(224, 108, 117, 0.15); }
.line-info { background: rgba(97, 175, 239, 0.15); }

.code-footer {
  padding: 0.25rem 0.75rem;
  background: #21252e;
  color: #5c6370;
  font-size: 0.7rem;
  text-align: right;
}

.math-frac { display: inline-flex; flex-direction: column; text-align: center; vertical-align: middle; }
.math-frac .num { border-bottom: 1px solid currentColor; padding: 0 0.2em; }
.math-frac .den { padding: 0 0.2em; }
.math-root sup { margin-right: 0.1em; }
.math-sqrt .radicand,
.math-root .radicand { border-top: 1px solid currentColor; padding: 0 0.1em; }
.math-sum,
.math-integral { font-size: 1.1em; }
.math-limit sub { font-size: 0.75em; }
.block-math {
  margin: 1rem 0;
  padding: 0.5rem 1rem;
  text-align: center;
  font-size: 1.1em;
}
.math-matrix { display: inline-table; border-collapse: collapse; margin: 0 0.25em; }
.math-matrix td { padding: 0.1em 0.4em; text-align: center; }
.user-mention { color: #8250df; font-weight: 500; }
"#;

/// Full standalone stylesheet: document styles plus the syntect theme
/// mapped onto the highlight classes.
pub fn standalone_css(highlighter: &Highlighter) -> Result<String> {
    let mut css = String::from(DOCUMENT_CSS);
    css.push('\n');
    css.push_str(&highlighter.theme_css()?);
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_css_combines_layers() {
        let css = standalone_css(&Highlighter::new()).unwrap();
        assert!(css.contains(".code-block"));
        assert!(css.contains(".hl-"));
    }

    #[test]
    fn test_document_css_names_every_math_fragment_class() {
        for class in [
            ".math-frac",
            ".math-root",
            ".math-sqrt",
            ".math-sum",
            ".math-integral",
            ".math-limit",
            ".math-matrix",
            ".block-math",
            ".user-mention",
        ] {
            assert!(DOCUMENT_CSS.contains(class), "missing rule for {class}");
        }
    }
}
