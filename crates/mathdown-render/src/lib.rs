//! Mathdown Render
//!
//! The HTML rendering pipeline: normalize fences, rewrite math
//! annotations, parse the result as Markdown with pulldown-cmark, and
//! write HTML with overrides for the node kinds mathdown styles.
//!
//! Rendering is total. Malformed input degrades to verbatim text
//! inside the usual Markdown fallbacks; nothing here returns an error
//! for bad content.
//!
//! # Example
//!
//! ```
//! use mathdown_render::{HtmlRenderer, RenderOptions};
//!
//! let renderer = HtmlRenderer::new(RenderOptions::default());
//! let html = renderer.render("# Title\n\nHalf is \\frac{1}{2}.");
//! assert!(html.contains("heading-icon"));
//! assert!(html.contains("class=\"math-frac\""));
//! ```

pub mod code;
pub mod css;
pub mod features;

pub use mathdown_syntax::Highlighter;

use log::debug;
use mathdown_core::{CodeBlockOptions, LinkTarget, Result};
use mathdown_rewrite::preprocess;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::{escape_href, escape_html};

/// Options for one rendering pass.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Applied to every fenced code block in the document
    pub code: CodeBlockOptions,
}

/// Renders preprocessed Markdown to an HTML fragment or document.
pub struct HtmlRenderer {
    options: RenderOptions,
    highlighter: Highlighter,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Render content to an HTML fragment.
    pub fn render(&self, content: &str) -> String {
        debug!("rendering {} bytes of content", content.len());
        let processed = preprocess(content);

        let mut opts = Options::empty();
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(&processed, opts);

        let mut writer = HtmlWriter::new(self);
        writer.run(parser);
        writer.out
    }

    /// Render content as a complete HTML document with the stylesheet
    /// embedded.
    pub fn render_standalone(&self, content: &str, title: &str) -> Result<String> {
        let body = self.render(content);
        let style = css::standalone_css(&self.highlighter)?;

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str("<title>");
        let _ = escape_html(&mut out, title);
        out.push_str("</title>\n<style>\n");
        out.push_str(&style);
        out.push_str("</style>\n</head>\n<body>\n");
        out.push_str(&body);
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

/// Event-stream to HTML writer with mathdown's node overrides.
struct HtmlWriter<'a> {
    renderer: &'a HtmlRenderer,
    out: String,
    /// Open links, true when external
    open_links: Vec<bool>,
    /// Fence language and accumulated text of an open code block
    code: Option<(Option<String>, String)>,
    /// Alt text of an open image; inner events collect here
    image_alt: Option<String>,
    in_table_head: bool,
}

impl<'a> HtmlWriter<'a> {
    fn new(renderer: &'a HtmlRenderer) -> Self {
        Self {
            renderer,
            out: String::new(),
            open_links: Vec::new(),
            code: None,
            image_alt: None,
            in_table_head: false,
        }
    }

    fn run<I>(&mut self, events: I)
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            match event {
                Event::Start(tag) => self.start_tag(tag),
                Event::End(tag) => self.end_tag(tag),
                Event::Text(text) => {
                    if let Some((_, buf)) = self.code.as_mut() {
                        buf.push_str(&text);
                    } else if let Some(alt) = self.image_alt.as_mut() {
                        alt.push_str(&text);
                    } else {
                        let _ = escape_html(&mut self.out, &text);
                    }
                }
                Event::Code(text) => {
                    self.out.push_str("<code class=\"inline-code\">");
                    let _ = escape_html(&mut self.out, &text);
                    self.out.push_str("</code>");
                }
                // Raw HTML passes through untouched; the rewriter's
                // own fragments (sub/sup, fractions, matrices) arrive
                // on this path
                Event::Html(html) | Event::InlineHtml(html) => {
                    if self.image_alt.is_none() {
                        self.out.push_str(&html);
                    }
                }
                Event::SoftBreak => {
                    if let Some((_, buf)) = self.code.as_mut() {
                        buf.push('\n');
                    } else {
                        self.out.push('\n');
                    }
                }
                Event::HardBreak => self.out.push_str("<br />\n"),
                Event::Rule => self.out.push_str("<hr />\n"),
                _ => {}
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'a>) {
        match tag {
            Tag::Paragraph => self.out.push_str("<p class=\"paragraph\">"),
            Tag::Heading { level, .. } => {
                let (name, styled) = heading_parts(level);
                self.out.push('<');
                self.out.push_str(name);
                if styled {
                    self.out.push_str(" class=\"heading\">");
                    self.out
                        .push_str("<span class=\"heading-icon\" aria-hidden=\"true\">\u{25c6}</span>");
                } else {
                    self.out.push('>');
                }
            }
            Tag::BlockQuote(_) => self.out.push_str("<blockquote class=\"quote\">\n"),
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            Tag::List(Some(start)) => {
                if start == 1 {
                    self.out.push_str("<ol class=\"list\">\n");
                } else {
                    self.out.push_str("<ol class=\"list\" start=\"");
                    self.out.push_str(&start.to_string());
                    self.out.push_str("\">\n");
                }
            }
            Tag::List(None) => self.out.push_str("<ul class=\"list\">\n"),
            Tag::Item => self.out.push_str("<li>"),
            Tag::Link { dest_url, .. } => match LinkTarget::classify(&dest_url) {
                LinkTarget::Internal(path) => {
                    self.open_links.push(false);
                    self.out
                        .push_str("<a class=\"link-internal\" data-nav=\"client\" href=\"");
                    let _ = escape_href(&mut self.out, &path);
                    self.out.push_str("\">");
                }
                LinkTarget::External(url) => {
                    self.open_links.push(true);
                    self.out.push_str("<a class=\"link-external\" href=\"");
                    let _ = escape_href(&mut self.out, &url);
                    self.out
                        .push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                }
            },
            Tag::Image { dest_url, .. } => {
                self.out.push_str("<img src=\"");
                let _ = escape_href(&mut self.out, &dest_url);
                self.out.push_str("\" alt=\"");
                self.image_alt = Some(String::new());
            }
            Tag::Emphasis => self.out.push_str("<em>"),
            Tag::Strong => self.out.push_str("<strong>"),
            Tag::Strikethrough => self.out.push_str("<del>"),
            Tag::Table(_) => self.out.push_str("<table>\n"),
            Tag::TableHead => {
                self.in_table_head = true;
                self.out.push_str("<thead>\n<tr>");
            }
            Tag::TableRow => self.out.push_str("<tr>"),
            Tag::TableCell => {
                self.out
                    .push_str(if self.in_table_head { "<th>" } else { "<td>" });
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.out.push_str("</p>\n"),
            TagEnd::Heading(level) => {
                let (name, _) = heading_parts(level);
                self.out.push_str("</");
                self.out.push_str(name);
                self.out.push_str(">\n");
            }
            TagEnd::BlockQuote(_) => self.out.push_str("</blockquote>\n"),
            TagEnd::CodeBlock => {
                if let Some((language, buf)) = self.code.take() {
                    let raw = buf.strip_suffix('\n').unwrap_or(&buf);
                    let opts = CodeBlockOptions {
                        language,
                        ..self.renderer.options.code.clone()
                    };
                    self.out.push_str(&code::render_code_block(
                        raw,
                        &opts,
                        &self.renderer.highlighter,
                    ));
                }
            }
            TagEnd::List(true) => self.out.push_str("</ol>\n"),
            TagEnd::List(false) => self.out.push_str("</ul>\n"),
            TagEnd::Item => self.out.push_str("</li>\n"),
            TagEnd::Link => {
                if self.open_links.pop().unwrap_or(false) {
                    self.out.push_str(
                        "<span class=\"external-link-icon\" aria-hidden=\"true\">\u{2197}</span>",
                    );
                }
                self.out.push_str("</a>");
            }
            TagEnd::Image => {
                let alt = self.image_alt.take().unwrap_or_default();
                let _ = escape_html(&mut self.out, &alt);
                self.out.push_str("\" />");
            }
            TagEnd::Emphasis => self.out.push_str("</em>"),
            TagEnd::Strong => self.out.push_str("</strong>"),
            TagEnd::Strikethrough => self.out.push_str("</del>"),
            TagEnd::Table => self.out.push_str("</tbody>\n</table>\n"),
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.out.push_str("</tr>\n</thead>\n<tbody>\n");
            }
            TagEnd::TableRow => self.out.push_str("</tr>\n"),
            TagEnd::TableCell => {
                self.out
                    .push_str(if self.in_table_head { "</th>" } else { "</td>" });
            }
            _ => {}
        }
    }
}

/// Tag name and whether the level gets the styled heading treatment.
/// Only levels 1 to 3 are overridden; deeper headings stay plain.
fn heading_parts(level: HeadingLevel) -> (&'static str, bool) {
    match level {
        HeadingLevel::H1 => ("h1", true),
        HeadingLevel::H2 => ("h2", true),
        HeadingLevel::H3 => ("h3", true),
        HeadingLevel::H4 => ("h4", false),
        HeadingLevel::H5 => ("h5", false),
        HeadingLevel::H6 => ("h6", false),
    }
}

/// First token of a fence info string, or None when absent.
fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(|s| s.to_string())
}

/// Collect a document's fenced code blocks in order as
/// (language, raw text) pairs, after the same preprocessing the
/// renderer applies. Drives the terminal typing animation.
pub fn extract_code_blocks(content: &str) -> Vec<(Option<String>, String)> {
    let processed = preprocess(content);
    let parser = Parser::new_ext(&processed, Options::empty());

    let mut blocks = Vec::new();
    let mut current: Option<(Option<String>, String)> = None;
    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                };
                current = Some((language, String::new()));
            }
            Event::Text(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, buf)) = current.take() {
                    let raw = buf.strip_suffix('\n').unwrap_or(&buf).to_string();
                    blocks.push((language, raw));
                }
            }
            _ => {}
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str) -> String {
        HtmlRenderer::new(RenderOptions::default()).render(content)
    }

    #[test]
    fn test_heading_levels_one_to_three_get_icon() {
        let html = render("# One\n\n## Two\n\n### Three\n\n#### Four");
        assert_eq!(html.matches("heading-icon").count(), 3);
        assert!(html.contains("<h1 class=\"heading\">"));
        assert!(html.contains("<h4>Four</h4>"));
        assert!(!html.contains("<h4 class"));
    }

    #[test]
    fn test_internal_link_uses_client_navigation() {
        let html = render("[docs](/docs/intro)");
        assert!(html.contains("class=\"link-internal\""));
        assert!(html.contains("data-nav=\"client\""));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_external_link_opens_new_context() {
        let html = render("[site](https://example.com)");
        assert!(html.contains("class=\"link-external\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("external-link-icon"));
    }

    #[test]
    fn test_inline_code() {
        let html = render("use `let x = 1` here");
        assert!(html.contains("<code class=\"inline-code\">let x = 1</code>"));
    }

    #[test]
    fn test_fenced_block_renders_full_chrome() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains("code-block"));
        assert!(html.contains("code-header"));
        assert!(html.contains("Rust"));
        assert!(html.contains("code-body"));
    }

    #[test]
    fn test_fence_without_surrounding_blank_lines_still_parses() {
        // The normalizer inserts the blank lines the parser needs
        let html = render("text\n```py\nprint(1)\n```more");
        assert!(html.contains("code-block"));
        assert!(html.contains("Python"));
    }

    #[test]
    fn test_math_rewrites_survive_markdown_parse() {
        let html = render("The value a_1 tends to \\infty.");
        assert!(html.contains("a\u{2081}"));
        assert!(html.contains('\u{221e}'));
    }

    #[test]
    fn test_fraction_html_passes_through_raw() {
        let html = render("Half is \\frac{1}{2}.");
        assert!(html.contains("<span class=\"num\">1</span>"));
        assert!(html.contains("<span class=\"den\">2</span>"));
    }

    #[test]
    fn test_blockquote_and_lists() {
        let html = render("> quoted\n\n- a\n- b\n\n1. x\n2. y");
        assert!(html.contains("<blockquote class=\"quote\">"));
        assert!(html.contains("<ul class=\"list\">"));
        assert!(html.contains("<ol class=\"list\">"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render("a < b & c");
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
    }

    #[test]
    fn test_standalone_embeds_stylesheet() {
        let renderer = HtmlRenderer::new(RenderOptions::default());
        let html = renderer.render_standalone("# Hi", "greeting").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>greeting</title>"));
        assert!(html.contains(".code-block"));
    }

    #[test]
    fn test_extract_code_blocks() {
        let blocks = extract_code_blocks("a\n```rust\nfn f() {}\n```\n\n```\nplain\n```");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].0.as_deref(), Some("rust"));
        assert_eq!(blocks[0].1, "fn f() {}");
        assert_eq!(blocks[1].0, None);
        assert_eq!(blocks[1].1, "plain");
    }

    #[test]
    fn test_render_is_total_on_junk() {
        let html = render("\\frac{unclosed ~ $ \u{0}```");
        assert!(!html.is_empty());
    }
}
