//! Markdown → HTML rendering for the HTML-based exporters
//!
//! Rendering is delegated to `pulldown-cmark` with math spans enabled. Math
//! events are re-emitted as MathJax-ready `\( \)` / `\[ \]` spans; the page
//! template loads MathJax from a CDN so equations render in the browser.

use pulldown_cmark::{html, CowStr, Event, Options, Parser};
use pulldown_cmark_escape::escape_html;

/// MathJax CDN bundle used by the standalone page template
const MATHJAX_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.7/MathJax.js?config=TeX-MML-AM_CHTML";

/// Base styling shared by the standalone HTML, PDF, and image exports
const PAGE_CSS: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; max-width: 800px; margin: 0 auto; background-color: white; }
pre { background-color: #f5f5f5; padding: 10px; border-radius: 5px; }
code { font-family: 'Courier New', monospace; }";

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_MATH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Pad `<` so an equation like `a<b` cannot be read as an HTML tag opener.
fn formula_disambiguate(s: &str) -> String {
    s.replace('<', " < ")
}

fn escaped(text: &str) -> String {
    let mut out = String::new();
    let _ = escape_html(&mut out, text);
    out
}

/// Render markdown to an HTML body fragment with MathJax-delimited math spans.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let events = parser.map(|event| match event {
        Event::InlineMath(math) => Event::InlineHtml(CowStr::from(format!(
            r#"<span class="math inline">\({}\)</span>"#,
            escaped(&formula_disambiguate(&math))
        ))),
        Event::DisplayMath(math) => Event::InlineHtml(CowStr::from(format!(
            r#"<span class="math display">\[{}\]</span>"#,
            escaped(&formula_disambiguate(&math))
        ))),
        _ => event,
    });

    let mut body = String::new();
    html::push_html(&mut body, events);
    body
}

/// Render markdown to an HTML body fragment with math left as literal TeX
/// text. Used by the Word exporter, where no MathJax runtime exists.
pub(crate) fn markdown_to_html_literal_math(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let events = parser.map(|event| match event {
        Event::InlineMath(math) => Event::Text(CowStr::from(format!("${}$", math))),
        Event::DisplayMath(math) => Event::Text(CowStr::from(format!("$${}$$", math))),
        _ => event,
    });

    let mut body = String::new();
    html::push_html(&mut body, events);
    body
}

/// Render a complete standalone HTML page for a converted document.
pub fn render_standalone_page(title: &str, markdown: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title}</title>
<meta charset="UTF-8">
<style>
{css}
</style>
<script src="{mathjax}" async></script>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escaped(title),
        css = PAGE_CSS,
        mathjax = MATHJAX_SRC,
        body = markdown_to_html(markdown),
    )
}
