//! Mathdown Syntax
//!
//! Syntax highlighting for code blocks using the syntect library,
//! emitting class-annotated HTML spans rather than inline styles so a
//! stylesheet controls the palette.
//!
//! Highlighting is line-oriented: the code block renderer wraps each
//! line in its own element (diff styling, line numbers), so every
//! highlighted line must be a self-contained, balanced HTML fragment.
//! A [`HighlightState`] carries the parse state across lines and
//! reopens spans for scopes that continue from a previous line, which
//! keeps multi-line tokens like block comments highlighted correctly.
//!
//! # Example
//!
//! ```
//! use mathdown_syntax::Highlighter;
//!
//! let hl = Highlighter::new();
//! let mut state = hl.new_highlight_state("rust");
//! let line1 = hl.highlight_line_with_state("/* start", &mut state);
//! let line2 = hl.highlight_line_with_state("   end */ fn f() {}", &mut state);
//! assert!(line1.contains("<span"));
//! assert!(line2.contains("<span"));
//! ```

mod languages;

pub use languages::{all_aliases, language_alias, language_label, LANGUAGE_ALIASES};

use mathdown_core::{MathdownError, Result};
use pulldown_cmark_escape::escape_html;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, line_tokens_to_classed_spans, ClassStyle};
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};

/// Class prefix on every highlight span, matching the generated CSS.
pub const CSS_PREFIX: &str = "hl-";

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: CSS_PREFIX };

/// Syntax highlighter for code blocks.
///
/// Wraps syntect with fence-alias resolution and a line-by-line
/// classed-HTML API.
pub struct Highlighter {
    /// Syntax definitions
    syntax_set: SyntaxSet,
    /// Color themes, used only to generate standalone CSS
    theme_set: ThemeSet,
    /// Theme backing the generated CSS
    theme_name: String,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme_name", &self.theme_name)
            .finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the default theme (base16-ocean.dark).
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create a highlighter whose generated CSS uses a specific theme.
    pub fn with_theme(theme_name: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme_name.to_string(),
        }
    }

    /// Get a reference to the syntax set.
    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }

    /// Get the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Get the current theme, falling back to any loaded theme when
    /// the configured name is unknown.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
    }

    /// Generate a stylesheet mapping highlight classes to the current
    /// theme's colors, for embedding in standalone output.
    pub fn theme_css(&self) -> Result<String> {
        let theme = self
            .theme()
            .ok_or_else(|| MathdownError::Render("no syntax themes loaded".into()))?;
        css_for_theme_with_class_style(theme, CLASS_STYLE)
            .map_err(|e| MathdownError::Render(e.to_string()))
    }

    /// Find the syntax definition for a fence language.
    ///
    /// Resolves aliases (py, js, rs) first, then falls back to
    /// syntect's own token and extension matching.
    pub fn syntax_for_language(&self, language: &str) -> Option<&SyntaxReference> {
        let canonical = language_alias(language);

        if let Some(syntax) = self.syntax_set.find_syntax_by_name(canonical) {
            return Some(syntax);
        }
        if let Some(syntax) = self.syntax_set.find_syntax_by_token(canonical) {
            return Some(syntax);
        }
        if let Some(syntax) = self.syntax_set.find_syntax_by_extension(canonical) {
            return Some(syntax);
        }

        self.syntax_set.find_syntax_by_token(language)
    }

    /// Get the plain text syntax (for unknown languages).
    pub fn plain_text(&self) -> &SyntaxReference {
        self.syntax_set.find_syntax_plain_text()
    }

    /// Check if a language is supported.
    pub fn has_language(&self, name: &str) -> bool {
        self.syntax_for_language(name).is_some()
    }

    /// Create a highlight state for line-by-line highlighting.
    pub fn new_highlight_state(&self, language: &str) -> HighlightState {
        let syntax = self
            .syntax_for_language(language)
            .unwrap_or_else(|| self.plain_text());
        HighlightState::new(syntax)
    }

    /// Highlight one line as a self-contained HTML fragment.
    ///
    /// Spans for scopes carried over from previous lines are reopened
    /// at the start and every span left open is closed at the end, so
    /// the fragment stays balanced even inside multi-line tokens.
    /// Highlighting is total: on any parse error the line falls back
    /// to plain escaped text.
    pub fn highlight_line_with_state(&self, line: &str, state: &mut HighlightState) -> String {
        let ops = match state.parse.parse_line(line, &self.syntax_set) {
            Ok(ops) => ops,
            Err(_) => return escape_plain(line),
        };

        let carried: Vec<Scope> = state.stack.as_slice().to_vec();
        match line_tokens_to_classed_spans(line, &ops, CLASS_STYLE, &mut state.stack) {
            Ok((html, delta)) => {
                let mut out = String::new();
                for scope in &carried {
                    push_open_span(&mut out, *scope);
                }
                out.push_str(&html);
                let open = carried.len() as isize + delta;
                for _ in 0..open.max(0) {
                    out.push_str("</span>");
                }
                out
            }
            Err(_) => escape_plain(line),
        }
    }

    /// Highlight a complete code block, one fragment per line.
    pub fn highlight_block(&self, code: &str, language: &str) -> Vec<String> {
        let mut state = self.new_highlight_state(language);
        code.split('\n')
            .map(|line| self.highlight_line_with_state(line, &mut state))
            .collect()
    }
}

/// Parse state carried across lines of one code block.
pub struct HighlightState {
    parse: ParseState,
    stack: ScopeStack,
}

impl HighlightState {
    /// Create a fresh state for a syntax definition.
    pub fn new(syntax: &SyntaxReference) -> Self {
        Self {
            parse: ParseState::new(syntax),
            stack: ScopeStack::new(),
        }
    }
}

/// Open a span carrying the prefixed classes for one scope, the same
/// shape syntect emits for scopes opened mid-line.
fn push_open_span(out: &mut String, scope: Scope) {
    out.push_str("<span class=\"");
    let dotted = scope.build_string();
    for (i, atom) in dotted.split('.').enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(CSS_PREFIX);
        out.push_str(atom);
    }
    out.push_str("\">");
}

fn escape_plain(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let _ = escape_html(&mut out, line);
    out
}
