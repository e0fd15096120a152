//! LaTeX-delimiter to Markdown-delimiter conversion (forward direction)
//!
//! Rewrites the backslash-escaped delimiter convention ChatGPT emits into the
//! dollar-sign convention Markdown/MathJax renderers understand:
//!
//! - `\( ... \)` → `$ ... $` (inline equations)
//! - `\[ ... \]` → `$$ ... $$` (display equations)
//!
//! The conversion is a total function: text outside matched spans passes
//! through byte-for-byte, and unmatched opening delimiters are left verbatim.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Display span: `\[ ... \]`, lazy, content may cross line boundaries.
    static ref DISPLAY_SPAN: Regex = Regex::new(r"(?s)\\\[(.*?)\\\]").unwrap();
    /// Inline span: `\( ... \)`, lazy, content may cross line boundaries.
    static ref INLINE_SPAN: Regex = Regex::new(r"(?s)\\\((.*?)\\\)").unwrap();
}

/// Convert backslash-delimited equation spans to dollar-delimited spans.
///
/// Display spans are rewritten before inline spans. The two grammars share no
/// characters, so the passes are independent, but the order is kept so a
/// display span can never be half-read as two inline delimiters.
pub fn latex_to_markdown(input: &str) -> String {
    let displays = DISPLAY_SPAN.replace_all(input, |caps: &Captures| {
        format!("$${}$$", &caps[1])
    });
    INLINE_SPAN
        .replace_all(displays.as_ref(), |caps: &Captures| {
            format!("${}$", &caps[1])
        })
        .into_owned()
}

/// Count the backslash-delimited spans in `input` without rewriting anything.
///
/// Returns `(inline, display)`. Used by format detection and the CLI
/// `--detect` mode.
pub fn count_source_spans(input: &str) -> (usize, usize) {
    (
        INLINE_SPAN.find_iter(input).count(),
        DISPLAY_SPAN.find_iter(input).count(),
    )
}
