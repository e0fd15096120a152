//! # eqmd
//!
//! Converter between ChatGPT-style LaTeX equation delimiters and
//! Markdown/MathJax delimiters, with document export.
//!
//! ## Features
//!
//! - **Bidirectional**: `\( \)` / `\[ \]` ↔ `$ $` / `$$ $$`
//! - **Total**: the rewrite never fails; unmatched delimiters pass through
//! - **Stateless core**: pure functions, safe to call from any thread
//! - **Session layer**: caller-owned editing state with bounded history,
//!   autosave, and injected clipboard/persistence capabilities
//! - **Export**: HTML, Markdown, LaTeX, plain text, Word-compatible HTML,
//!   and PDF/JPEG via the wkhtmltox binaries
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Delimiter Conversion
//!
//! ```rust
//! use eqmd::{latex_to_markdown, markdown_to_latex};
//!
//! // ChatGPT-style LaTeX → Markdown
//! assert_eq!(latex_to_markdown(r"\(E = mc^2\)"), "$E = mc^2$");
//! assert_eq!(latex_to_markdown(r"\[x^2\]"), "$$x^2$$");
//!
//! // Markdown → ChatGPT-style LaTeX
//! assert_eq!(markdown_to_latex("$E = mc^2$"), r"\(E = mc^2\)");
//! ```
//!
//! ### Session With Export
//!
//! ```rust
//! use eqmd::export::{export, DocumentView, ExportFormat};
//! use eqmd::Session;
//!
//! let mut session = Session::new();
//! session.set_input(r"Euler: \(e^{i\pi} + 1 = 0\)");
//!
//! let doc = DocumentView::new(session.output(), "Euler");
//! let artifact = export(&doc, ExportFormat::Html).unwrap();
//! assert_eq!(artifact.media_type, "text/html");
//! ```

/// Core conversion modules
pub mod core;

/// Document export dispatch
pub mod export;

/// Bounded conversion history
pub mod history;

/// Injected host capabilities (clipboard, persistence)
pub mod providers;

/// Caller-owned session state
pub mod session;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use crate::core::{
    count_source_spans, count_target_spans, latex_to_markdown, markdown_to_latex, span_stats,
    SpanStats,
};

// Re-export session, history, and capability types
pub use crate::history::{History, HistoryEntry};
pub use crate::providers::{
    ClipboardProvider, MemoryClipboard, MemoryPersistence, NoopClipboard, NoopPersistence,
    PersistenceProvider,
};
pub use crate::session::{DisplayMode, Session};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::providers::StdPersistence;

// Re-export export dispatch types
pub use crate::export::{DocumentView, ExportArtifact, ExportFormat};

// Re-export error types
pub use crate::utils::error::{ExportError, ExportResult, ProviderError};

/// Detect which delimiter convention a piece of text uses
///
/// Returns `"latex"`, `"markdown"`, or `"unknown"` based on the equation
/// spans found in the text.
pub fn detect_format(input: &str) -> &'static str {
    let stats = span_stats(input);
    let source = stats.source_total();
    let target = stats.target_total();

    if source > target {
        "latex"
    } else if target > source {
        "markdown"
    } else if source > 0 {
        // Equal non-zero counts: favor the forward direction
        "latex"
    } else {
        "unknown"
    }
}

/// Convert with automatic direction detection
///
/// Detects the input convention and converts to the opposite one, returning
/// the output together with its convention name. Text with no recognizable
/// spans takes the forward direction, which passes it through unchanged.
pub fn convert_auto(input: &str) -> (String, &'static str) {
    match detect_format(input) {
        "markdown" => (markdown_to_latex(input), "latex"),
        _ => (latex_to_markdown(input), "markdown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_format_latex() {
        assert_eq!(detect_format(r"\(E = mc^2\)"), "latex");
        assert_eq!(detect_format(r"\[x^2\]"), "latex");
    }

    #[test]
    fn test_detect_format_markdown() {
        assert_eq!(detect_format("$E = mc^2$"), "markdown");
        assert_eq!(detect_format("$$x^2$$"), "markdown");
    }

    #[test]
    fn test_detect_format_unknown() {
        assert_eq!(detect_format("no equations at all"), "unknown");
        assert_eq!(detect_format(""), "unknown");
    }

    #[test]
    fn test_detect_format_tie_prefers_latex() {
        assert_eq!(detect_format(r"\(a\) and $b$"), "latex");
    }

    #[test]
    fn test_convert_auto_latex_input() {
        let (output, format) = convert_auto(r"\(a\)");
        assert_eq!(output, "$a$");
        assert_eq!(format, "markdown");
    }

    #[test]
    fn test_convert_auto_markdown_input() {
        let (output, format) = convert_auto("$$a$$");
        assert_eq!(output, r"\[a\]");
        assert_eq!(format, "latex");
    }

    #[test]
    fn test_convert_auto_plain_text_passes_through() {
        let (output, format) = convert_auto("just words");
        assert_eq!(output, "just words");
        assert_eq!(format, "markdown");
    }

    #[test]
    fn test_round_trip_stability() {
        let input = "Mixed \\(inline\\) text and\n\\[\ndisplay\n\\]\nspans.";
        let target = latex_to_markdown(input);
        let round_tripped = latex_to_markdown(&markdown_to_latex(&target));
        assert_eq!(round_tripped, target);
    }
}
