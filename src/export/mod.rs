//! Document export dispatch
//!
//! One "render document to format F" entry point over a closed set of
//! exporters, replacing per-format copy-pasted templates. The byte-oriented
//! formats (markdown, text, LaTeX) are direct encodings of the converted
//! text; the HTML family shares one page template; PDF and JPEG delegate to
//! external converters and report their failures as recoverable errors.

pub mod html;
#[cfg(not(target_arch = "wasm32"))]
pub mod image;
#[cfg(not(target_arch = "wasm32"))]
pub mod pdf;
#[cfg(not(target_arch = "wasm32"))]
mod tool;
pub mod word;

use crate::core::markdown_to_latex;
use crate::utils::error::ExportResult;

#[cfg(target_arch = "wasm32")]
use crate::utils::error::ExportError;

/// The closed set of export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Markdown,
    Latex,
    Text,
    Pdf,
    Jpeg,
    Word,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Html,
            ExportFormat::Markdown,
            ExportFormat::Latex,
            ExportFormat::Text,
            ExportFormat::Pdf,
            ExportFormat::Jpeg,
            ExportFormat::Word,
        ]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
            ExportFormat::Latex => "tex",
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Word => "doc",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Latex => "application/x-latex",
            ExportFormat::Text => "text/plain",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Word => "application/msword",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Latex => "latex",
            ExportFormat::Text => "text",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Word => "word",
        };
        f.write_str(name)
    }
}

/// Borrowed view of the document to export: the converted (target-form)
/// markdown plus a display title.
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    pub markdown: &'a str,
    pub title: &'a str,
}

impl<'a> DocumentView<'a> {
    pub fn new(markdown: &'a str, title: &'a str) -> Self {
        Self { markdown, title }
    }
}

/// A produced export: raw bytes plus enough metadata to hand the file to a
/// browser download, a filesystem write, or an HTTP response.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    pub file_name: String,
}

fn file_stem(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if stem.chars().all(|c| c == '_') {
        "converted_markdown".to_string()
    } else {
        stem
    }
}

/// Export a document to the requested format.
///
/// The pure formats cannot fail; PDF and JPEG surface missing or failing
/// external converters as errors without touching the caller's document.
pub fn export(doc: &DocumentView<'_>, format: ExportFormat) -> ExportResult<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Markdown | ExportFormat::Text => doc.markdown.as_bytes().to_vec(),
        ExportFormat::Latex => markdown_to_latex(doc.markdown).into_bytes(),
        ExportFormat::Html => html::render_standalone_page(doc.title, doc.markdown).into_bytes(),
        ExportFormat::Word => word::render_word_document(doc.title, doc.markdown).into_bytes(),
        #[cfg(not(target_arch = "wasm32"))]
        ExportFormat::Pdf => pdf::html_to_pdf(&html::render_standalone_page(doc.title, doc.markdown))?,
        #[cfg(not(target_arch = "wasm32"))]
        ExportFormat::Jpeg => {
            image::html_to_jpeg(&html::render_standalone_page(doc.title, doc.markdown))?
        }
        #[cfg(target_arch = "wasm32")]
        ExportFormat::Pdf | ExportFormat::Jpeg => {
            return Err(ExportError::render(
                "PDF and image export require a native host",
            ))
        }
    };

    Ok(ExportArtifact {
        bytes,
        media_type: format.media_type(),
        file_name: format!("{}.{}", file_stem(doc.title), format.extension()),
    })
}

/// Export a document and write the artifact to `path`.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_to_file(
    doc: &DocumentView<'_>,
    format: ExportFormat,
    path: impl AsRef<std::path::Path>,
) -> ExportResult<ExportArtifact> {
    let artifact = export(doc, format)?;
    std::fs::write(path, &artifact.bytes)?;
    Ok(artifact)
}
