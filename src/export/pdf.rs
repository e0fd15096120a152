//! HTML → PDF export via `wkhtmltopdf`

#![cfg(not(target_arch = "wasm32"))]

use crate::utils::error::ExportResult;

use super::tool;

const TOOL: &str = "wkhtmltopdf";
const HINT: &str = "Install wkhtmltopdf and make sure it is on PATH";

/// Render an HTML page to PDF bytes.
///
/// Reads the page over stdin and collects the PDF from stdout, so no
/// temporary files are left behind on failure.
pub fn html_to_pdf(html: &str) -> ExportResult<Vec<u8>> {
    tool::run(
        TOOL,
        &["--quiet", "--encoding", "utf-8", "-", "-"],
        html.as_bytes(),
        HINT,
    )
}
