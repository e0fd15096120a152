//! External converter invocation (`html -> stdin`, `bytes <- stdout`)
//!
//! The PDF and image exporters delegate to the wkhtmltox binaries. A missing
//! binary surfaces as a recoverable `MissingTool` error with an install hint;
//! a non-zero exit becomes `ToolFailed` carrying the tool's stderr.

#![cfg(not(target_arch = "wasm32"))]

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::utils::error::{ExportError, ExportResult};

pub(crate) fn run(tool: &str, args: &[&str], input: &[u8], hint: &str) -> ExportResult<Vec<u8>> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExportError::missing_tool_with_hint(tool, hint),
            _ => ExportError::from(e),
        })?;

    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExportError::tool_failed(tool, "could not open stdin"))?;
        stdin.write_all(input)?;
    }

    let output = child.wait_with_output()?;
    if output.status.success() {
        Ok(output.stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ExportError::tool_failed(tool, stderr.trim().to_string()))
    }
}
