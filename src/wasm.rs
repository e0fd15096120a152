//! WASM bindings for eqmd
//!
//! This module provides JavaScript-accessible functions for the delimiter
//! conversion plus the pure export formats.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Conversion result with detection metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Convention of the output: "markdown" or "latex"
    pub format: String,
    /// Inline spans found in the input (either convention)
    pub inline_spans: usize,
    /// Display spans found in the input (either convention)
    pub display_spans: usize,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert ChatGPT-style LaTeX delimiters to Markdown delimiters
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "latexToMarkdown")]
pub fn latex_to_markdown_wasm(input: &str) -> String {
    crate::latex_to_markdown(input)
}

/// Convert Markdown delimiters back to ChatGPT-style LaTeX delimiters
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "markdownToLatex")]
pub fn markdown_to_latex_wasm(input: &str) -> String {
    crate::markdown_to_latex(input)
}

/// Detect the delimiter convention of the input
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input).to_string()
}

/// Render converted markdown to an HTML body fragment with MathJax spans
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "markdownToHtml")]
pub fn markdown_to_html_wasm(markdown: &str) -> String {
    crate::export::html::markdown_to_html(markdown)
}

/// Convert with automatic direction detection, returning output plus metadata
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertWithInfo")]
pub fn convert_with_info(input: &str) -> Result<JsValue, JsValue> {
    let stats = crate::span_stats(input);
    let (output, format) = crate::convert_auto(input);

    let result = ConvertResult {
        output,
        format: format.to_string(),
        inline_spans: stats.source_inline + stats.target_inline,
        display_spans: stats.source_display + stats.target_display,
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}
