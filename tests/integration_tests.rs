//! Integration tests for Eqmd conversion, session handling, and export

use eqmd::export::{export, DocumentView, ExportFormat};
use eqmd::{
    convert_auto, detect_format, latex_to_markdown, markdown_to_latex, span_stats, DisplayMode,
    ClipboardProvider, History, MemoryClipboard, MemoryPersistence, Session,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Forward Conversion - LaTeX delimiters to Markdown delimiters
// ============================================================================

mod l2m {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_equation() {
        assert_eq!(latex_to_markdown(r"\(E = mc^2\)"), "$E = mc^2$");
    }

    #[test]
    fn test_display_equation() {
        assert_eq!(latex_to_markdown(r"\[x^2\]"), "$$x^2$$");
    }

    #[test]
    fn test_passthrough() {
        let text = "A paragraph without any math in it.\nSecond line.";
        assert_eq!(latex_to_markdown(text), text);
    }

    #[test]
    fn test_multiline_display_equation() {
        let input = "\\[\n\\int_{a}^{b} f(x) \\, dx = F(b) - F(a)\n\\]";
        let expected = "$$\n\\int_{a}^{b} f(x) \\, dx = F(b) - F(a)\n$$";
        assert_eq!(latex_to_markdown(input), expected);
    }

    #[test]
    fn test_multiple_independent_spans() {
        assert_eq!(latex_to_markdown(r"\(a\) and \(b\)"), "$a$ and $b$");
        assert_eq!(
            latex_to_markdown(r"\(\alpha + \beta = \gamma\) and \(x^2 + y^2 = z^2\)"),
            r"$\alpha + \beta = \gamma$ and $x^2 + y^2 = z^2$"
        );
    }

    #[test]
    fn test_mixed_display_and_inline() {
        assert_eq!(latex_to_markdown(r"\[x\] and \(y\)"), "$$x$$ and $y$");
    }

    #[test]
    fn test_unmatched_delimiters_left_verbatim() {
        assert_eq!(latex_to_markdown(r"\(unterminated"), r"\(unterminated");
        assert_eq!(latex_to_markdown(r"open \[ forever"), r"open \[ forever");
    }

    #[test]
    fn test_chatgpt_style_document() {
        let input = "Here's inline LaTeX: \\(E = mc^2\\) in a sentence.\n\n\
                     And a display equation:\n\\[\n\\frac{d}{dx} f(x)\n\\]\n";
        let output = latex_to_markdown(input);
        assert!(output.contains("$E = mc^2$"));
        assert!(output.contains("$$\n\\frac{d}{dx} f(x)\n$$"));
        assert!(!output.contains("\\("));
        assert!(!output.contains("\\["));
    }
}

// ============================================================================
// Inverse Conversion - Markdown delimiters to LaTeX delimiters
// ============================================================================

mod m2l {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_equation() {
        assert_eq!(markdown_to_latex("$E = mc^2$"), r"\(E = mc^2\)");
    }

    #[test]
    fn test_display_equation() {
        assert_eq!(markdown_to_latex("$$x^2$$"), r"\[x^2\]");
    }

    #[test]
    fn test_passthrough() {
        let text = "No dollar signs anywhere.";
        assert_eq!(markdown_to_latex(text), text);
    }

    #[test]
    fn test_display_markers_not_split_into_inline() {
        assert_eq!(
            markdown_to_latex("$$display$$ then $inline$"),
            r"\[display\] then \(inline\)"
        );
    }

    #[test]
    fn test_lone_dollar_untouched() {
        assert_eq!(markdown_to_latex("only $1 here"), "only $1 here");
    }
}

// ============================================================================
// Round Trips and Detection
// ============================================================================

mod round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_target_form_is_stable_under_round_trip() {
        let inputs = [
            r"\(a\)",
            r"\[b\]",
            r"plain text",
            "mixed \\(x\\) and \\[\ny\n\\] and prose",
            r"\(a\) \(b\) \(c\)",
        ];
        for input in inputs {
            let target = latex_to_markdown(input);
            assert_eq!(
                latex_to_markdown(&markdown_to_latex(&target)),
                target,
                "round trip diverged for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(r"\(x\)"), "latex");
        assert_eq!(detect_format("$x$"), "markdown");
        assert_eq!(detect_format("prose"), "unknown");
    }

    #[test]
    fn test_convert_auto_both_directions() {
        assert_eq!(convert_auto(r"\(x\)"), ("$x$".to_string(), "markdown"));
        assert_eq!(convert_auto("$x$"), (r"\(x\)".to_string(), "latex"));
    }

    #[test]
    fn test_span_stats() {
        let stats = span_stats(r"\(a\) \[b\] $c$ $$d$$");
        assert_eq!(stats.source_inline, 1);
        assert_eq!(stats.source_display, 1);
        assert_eq!(stats.target_inline, 1);
        assert_eq!(stats.target_display, 1);
    }
}

// ============================================================================
// Session and History
// ============================================================================

mod session {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_session_conversion_flow() {
        let mut session = Session::new();
        session.set_input(r"\(E = mc^2\) plus \[x\]");
        assert_eq!(session.output(), "$E = mc^2$ plus $$x$$");
        assert_eq!(session.latex_output(), r"\(E = mc^2\) plus \[x\]");
    }

    #[test]
    fn test_manual_edits_survive_until_reconvert() {
        let mut session = Session::new();
        session.set_input(r"\(a\)");
        session.edit_output("$a$ edited");
        assert_eq!(session.output(), "$a$ edited");
        session.reconvert();
        assert_eq!(session.output(), "$a$");
    }

    #[test]
    fn test_clipboard_round_trip() {
        let clipboard = MemoryClipboard::with_contents(r"\(from clipboard\)");
        let mut session = Session::new();
        session.paste_input(&clipboard).unwrap();
        assert_eq!(session.output(), "$from clipboard$");

        session.copy_output(&clipboard).unwrap();
        assert_eq!(clipboard.read().unwrap(), "$from clipboard$");
    }

    #[test]
    fn test_history_records_conversions() {
        let mut session = Session::with_history_capacity(2);
        session.set_input(r"\(a\)");
        session.set_input(r"\(b\)");
        session.set_input(r"\(c\)");

        // Bounded retention keeps only the two most recent
        assert_eq!(session.history().len(), 2);
        let outputs: Vec<_> = session
            .history()
            .entries()
            .map(|e| e.output.as_str())
            .collect();
        assert_eq!(outputs, vec!["$b$", "$c$"]);
    }

    #[test]
    fn test_history_timestamps_are_ordered() {
        let mut history = History::new(10);
        history.record("a", "b");
        history.record("c", "d");
        let times: Vec<_> = history.entries().map(|e| e.timestamp).collect();
        assert!(times[0] <= times[1]);
    }

    #[test]
    fn test_autosave_and_history_persistence() {
        let store = MemoryPersistence::new();

        let mut session = Session::new();
        session.set_input(r"\(saved\)");
        session.set_display_mode(DisplayMode::SideBySide);
        session.autosave(&store, "session").unwrap();
        session.history().save(&store, "history").unwrap();

        let mut restored = Session::new();
        assert!(restored.restore(&store, "session").unwrap());
        assert_eq!(restored.input(), r"\(saved\)");
        assert_eq!(restored.output(), "$saved$");
        assert_eq!(restored.display_mode(), DisplayMode::SideBySide);

        let history = History::load(&store, "history", 10).unwrap();
        assert_eq!(history.latest().map(|e| e.output.as_str()), Some("$saved$"));
    }
}

// ============================================================================
// Export
// ============================================================================

mod export_formats {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_and_text_exports_are_verbatim() {
        let markdown = latex_to_markdown("# Title\n\n\\(E = mc^2\\)");
        let doc = DocumentView::new(&markdown, "Test Doc");

        for format in [ExportFormat::Markdown, ExportFormat::Text] {
            let artifact = export(&doc, format).unwrap();
            assert_eq!(artifact.bytes, markdown.as_bytes());
        }
    }

    #[test]
    fn test_latex_export_restores_delimiters() {
        let markdown = "$E = mc^2$ and $$x$$";
        let doc = DocumentView::new(markdown, "Doc");
        let artifact = export(&doc, ExportFormat::Latex).unwrap();
        assert_eq!(artifact.bytes, br"\(E = mc^2\) and \[x\]");
    }

    #[test]
    fn test_html_export_contains_mathjax() {
        let doc = DocumentView::new("$E = mc^2$", "Doc");
        let artifact = export(&doc, ExportFormat::Html).unwrap();
        let page = String::from_utf8(artifact.bytes).unwrap();
        assert!(page.contains("MathJax.js"));
        assert!(page.contains(r"\(E = mc^2\)"));
        assert_eq!(artifact.media_type, "text/html");
    }

    #[test]
    fn test_word_export_is_office_html() {
        let doc = DocumentView::new("# Heading\n\n$x$", "Doc");
        let artifact = export(&doc, ExportFormat::Word).unwrap();
        let page = String::from_utf8(artifact.bytes).unwrap();
        assert!(page.contains("schemas-microsoft-com:office:word"));
        assert!(page.contains("$x$"));
        assert_eq!(artifact.file_name, "doc.doc");
    }

    #[test]
    fn test_export_failure_leaves_no_panic() {
        // PDF/JPEG need external binaries that test hosts may not have; the
        // exporter must fail with a reported error, never a panic.
        let doc = DocumentView::new("$x$", "Doc");
        for format in [ExportFormat::Pdf, ExportFormat::Jpeg] {
            let _ = export(&doc, format);
        }
    }

    #[test]
    fn test_file_names_follow_title() {
        let doc = DocumentView::new("$x$", "My Equations");
        let artifact = export(&doc, ExportFormat::Markdown).unwrap();
        assert_eq!(artifact.file_name, "my_equations.md");
    }
}
