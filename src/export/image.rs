//! HTML → JPEG export via `wkhtmltoimage`

#![cfg(not(target_arch = "wasm32"))]

use crate::utils::error::ExportResult;

use super::tool;

const TOOL: &str = "wkhtmltoimage";
const HINT: &str = "Install wkhtmltoimage (part of wkhtmltox) and make sure it is on PATH";

/// Render an HTML page to JPEG bytes.
pub fn html_to_jpeg(html: &str) -> ExportResult<Vec<u8>> {
    tool::run(
        TOOL,
        &["--quiet", "--format", "jpg", "--encoding", "utf-8", "-", "-"],
        html.as_bytes(),
        HINT,
    )
}
