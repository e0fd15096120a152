//! Error handling for Eqmd
//!
//! The delimiter transcoder itself is a total function and has no error
//! taxonomy. Everything fallible lives at the edges: exporters (missing
//! external binaries, I/O) and capability providers (clipboard, persistence).

use std::fmt;

/// Export error type
#[derive(Debug, Clone)]
pub enum ExportError {
    /// A required external tool is not installed
    MissingTool { tool: String, hint: Option<String> },
    /// An external tool ran but reported failure
    ToolFailed { tool: String, stderr: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Rendering error
    RenderError { message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingTool { tool, hint } => {
                if let Some(hint) = hint {
                    write!(f, "Required tool '{}' not found. {}", tool, hint)
                } else {
                    write!(f, "Required tool '{}' not found", tool)
                }
            }
            ExportError::ToolFailed { tool, stderr } => {
                write!(f, "Tool '{}' failed: {}", tool, stderr)
            }
            ExportError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ExportError::RenderError { message } => {
                write!(f, "Render error: {}", message)
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

// Convenience constructors for errors
impl ExportError {
    pub fn missing_tool(tool: impl Into<String>) -> Self {
        ExportError::MissingTool {
            tool: tool.into(),
            hint: None,
        }
    }

    pub fn missing_tool_with_hint(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        ExportError::MissingTool {
            tool: tool.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn tool_failed(tool: impl Into<String>, stderr: impl Into<String>) -> Self {
        ExportError::ToolFailed {
            tool: tool.into(),
            stderr: stderr.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        ExportError::RenderError {
            message: message.into(),
        }
    }
}

/// Error type for capability providers (clipboard, persistence)
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// The operation is not supported in this environment
    NotSupported(String),
    /// The requested entry does not exist
    NotFound(String),
    /// Underlying IO failure
    IoError(String),
    /// Internal error (poisoned locks, corrupt payloads)
    Internal(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            ProviderError::NotFound(key) => write!(f, "Not found: {}", key),
            ProviderError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProviderError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::IoError(err.to_string())
    }
}
