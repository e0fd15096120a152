//! Core conversion modules
//!
//! This module contains the two delimiter-rewriting passes:
//! - `latex2markdown`: `\( \)` / `\[ \]` → `$ $` / `$$ $$`
//! - `markdown2latex`: `$ $` / `$$ $$` → `\( \)` / `\[ \]` (best-effort inverse)

pub mod latex2markdown;
pub mod markdown2latex;

pub use latex2markdown::{count_source_spans, latex_to_markdown};
pub use markdown2latex::{count_target_spans, markdown_to_latex};

/// Per-convention span counts for a piece of text.
///
/// Feeds format detection and the CLI `--detect` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStats {
    /// `\( \)` spans
    pub source_inline: usize,
    /// `\[ \]` spans
    pub source_display: usize,
    /// `$ $` spans
    pub target_inline: usize,
    /// `$$ $$` spans
    pub target_display: usize,
}

impl SpanStats {
    pub fn source_total(&self) -> usize {
        self.source_inline + self.source_display
    }

    pub fn target_total(&self) -> usize {
        self.target_inline + self.target_display
    }
}

/// Count equation spans of both conventions in `input`.
pub fn span_stats(input: &str) -> SpanStats {
    let (source_inline, source_display) = count_source_spans(input);
    let (target_inline, target_display) = count_target_spans(input);
    SpanStats {
        source_inline,
        source_display,
        target_inline,
        target_display,
    }
}
