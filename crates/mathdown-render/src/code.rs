//! Code block rendering.
//!
//! A fenced block renders as header, body, footer. The header carries
//! three decorative dots, the language label, and the copy button; the
//! body holds one element per line so diff styling and line numbers
//! attach per line; the footer is a static attribution strip.
//!
//! The copy button carries the raw (unprocessed) block text base64
//! encoded in `data-raw`, so a copy action always yields the text as
//! written, markers included.

use base64::{engine::general_purpose::STANDARD, Engine};
use mathdown_core::{classify_line, CodeBlockOptions};
use mathdown_syntax::{language_label, Highlighter};
use pulldown_cmark_escape::escape_html;

/// Footer attribution text.
pub const ATTRIBUTION: &str = "rendered with mathdown";

/// Render a complete fenced code block.
pub fn render_code_block(raw: &str, opts: &CodeBlockOptions, highlighter: &Highlighter) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"code-block\">\n");
    push_header(&mut out, raw, opts);
    push_body(&mut out, raw, opts, highlighter);
    if opts.show_attribution {
        out.push_str("<div class=\"code-footer\">");
        out.push_str(ATTRIBUTION);
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn push_header(out: &mut String, raw: &str, opts: &CodeBlockOptions) {
    out.push_str("<div class=\"code-header\">");
    out.push_str(
        "<span class=\"code-dots\"><span class=\"dot\"></span>\
         <span class=\"dot\"></span><span class=\"dot\"></span></span>",
    );

    if opts.show_language_hint {
        if let Some(lang) = opts.language.as_deref().filter(|l| !l.is_empty()) {
            out.push_str("<span class=\"code-language\">");
            let _ = escape_html(&mut *out, language_label(lang));
            out.push_str("</span>");
        }
    }

    if opts.show_copy_button {
        let encoded = STANDARD.encode(raw.as_bytes());
        out.push_str("<button type=\"button\" class=\"copy-button\" data-raw=\"");
        out.push_str(&encoded);
        out.push_str("\" aria-label=\"Copy code\">Copy</button>");
    }

    out.push_str("</div>\n");
}

fn push_body(out: &mut String, raw: &str, opts: &CodeBlockOptions, highlighter: &Highlighter) {
    let lang = opts.language.as_deref().unwrap_or("text");
    let mut state = highlighter.new_highlight_state(lang);

    out.push_str("<pre class=\"code-body\"><code>");
    for (ix, line) in raw.split('\n').enumerate() {
        let (style, rest) = classify_line(line);

        out.push_str("<span class=\"code-line");
        if let Some(class) = style.class() {
            out.push(' ');
            out.push_str(class);
        }
        out.push_str("\">");

        if opts.show_line_numbers {
            out.push_str("<span class=\"line-number\">");
            out.push_str(&(ix + 1).to_string());
            out.push_str("</span>");
        }

        out.push_str(&highlighter.highlight_line_with_state(rest, &mut state));
        out.push_str("</span>\n");
    }
    out.push_str("</code></pre>\n");
}
