//! Markdown-delimiter to LaTeX-delimiter conversion (inverse direction)
//!
//! Best-effort reconstruction of the backslash-escaped convention from
//! dollar-delimited text:
//!
//! - `$$ ... $$` → `\[ ... \]` (display equations)
//! - `$ ... $` → `\( ... \)` (inline equations)
//!
//! Known limitation: the grammar assumes every `$`-delimited span is an
//! equation. Literal currency dollars in the input will be misread as
//! delimiters; callers that care must keep such text out of the inverse path.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Display span: `$$ ... $$`, lazy, content may cross line boundaries.
    static ref DISPLAY_SPAN: Regex = Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap();
    /// Inline span: `$ ... $` where the content contains no `$`. The `[^$]`
    /// class encodes the adjacency rule a negative look-around would express:
    /// a single-dollar match can never touch a double-dollar marker.
    static ref INLINE_SPAN: Regex = Regex::new(r"(?s)\$([^$]+?)\$").unwrap();
}

/// Convert dollar-delimited equation spans back to backslash-delimited spans.
///
/// Double-dollar spans are consumed first so the remaining single-dollar pass
/// only ever sees inline spans. Always produces output; text without spans
/// passes through unchanged.
pub fn markdown_to_latex(input: &str) -> String {
    let displays = DISPLAY_SPAN.replace_all(input, |caps: &Captures| {
        format!("\\[{}\\]", &caps[1])
    });
    INLINE_SPAN
        .replace_all(displays.as_ref(), |caps: &Captures| {
            format!("\\({}\\)", &caps[1])
        })
        .into_owned()
}

/// Count the dollar-delimited spans in `input` without rewriting anything.
///
/// Returns `(inline, display)`. Display spans are stripped before the inline
/// count so a `$$` marker is never counted as two inline delimiters.
pub fn count_target_spans(input: &str) -> (usize, usize) {
    let display = DISPLAY_SPAN.find_iter(input).count();
    let stripped = DISPLAY_SPAN.replace_all(input, "");
    let inline = INLINE_SPAN.find_iter(stripped.as_ref()).count();
    (inline, display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_passthrough_without_spans() {
        let text = "plain prose, no equations here";
        assert_eq!(markdown_to_latex(text), text);
    }

    #[test]
    fn test_inline_conversion() {
        assert_eq!(markdown_to_latex("$E = mc^2$"), r"\(E = mc^2\)");
    }

    #[test]
    fn test_display_conversion() {
        assert_eq!(markdown_to_latex("$$x^2$$"), r"\[x^2\]");
    }

    #[test]
    fn test_multiline_display_span() {
        assert_eq!(markdown_to_latex("$$\n a+b \n$$"), "\\[\n a+b \n\\]");
    }

    #[test]
    fn test_display_consumed_before_inline() {
        assert_eq!(markdown_to_latex("$$x$$ and $y$"), r"\[x\] and \(y\)");
    }

    #[test]
    fn test_adjacent_inline_spans() {
        assert_eq!(markdown_to_latex("$a$$b$"), r"\(a\)\(b\)");
    }

    #[test]
    fn test_lone_dollar_left_alone() {
        assert_eq!(markdown_to_latex("costs $5"), "costs $5");
    }

    #[test]
    fn test_currency_pair_is_misread() {
        // Documented limitation: two literal dollars form a span.
        assert_eq!(markdown_to_latex("$5 or $10"), r"\(5 or \)10");
    }

    #[test]
    fn test_count_target_spans() {
        let input = "$a$ then $$b$$ then $c$";
        assert_eq!(count_target_spans(input), (2, 1));
    }
}
