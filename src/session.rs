//! Caller-owned session state
//!
//! The original tool kept input, output, and display mode in ambient
//! per-interaction state. Here that becomes an explicit `Session` object the
//! caller owns and passes by reference; the transcoder stays a pure function
//! with no session concept.

use serde::{Deserialize, Serialize};

use crate::core::{latex_to_markdown, markdown_to_latex};
use crate::history::{History, DEFAULT_CAPACITY};
use crate::providers::{ClipboardProvider, PersistenceProvider};
use crate::utils::error::ProviderError;

/// How a UI should present the converted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Show only the rendered output
    #[default]
    RenderedOnly,
    /// Show rendered and raw output side by side
    SideBySide,
}

/// Persisted session snapshot (autosave payload)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionSnapshot {
    input: String,
    output: String,
    display_mode: DisplayMode,
}

/// One editing session: source text, converted (editable) output, display
/// mode, and a bounded conversion history.
#[derive(Debug)]
pub struct Session {
    input: String,
    output: String,
    display_mode: DisplayMode,
    history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            display_mode: DisplayMode::default(),
            history: History::new(capacity),
        }
    }

    /// Set the source text and run the forward conversion.
    ///
    /// Overwrites any manual edits to the output and records the pair in the
    /// history (empty input is not recorded).
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.output = latex_to_markdown(text);
        if !text.is_empty() {
            self.history.record(&self.input, &self.output);
        }
    }

    /// Pull the source text from the clipboard and convert it
    pub fn paste_input(&mut self, clipboard: &dyn ClipboardProvider) -> Result<(), ProviderError> {
        let text = clipboard.read()?;
        self.set_input(&text);
        Ok(())
    }

    /// Copy the converted output to the clipboard
    pub fn copy_output(&self, clipboard: &dyn ClipboardProvider) -> Result<(), ProviderError> {
        clipboard.write(&self.output)
    }

    /// Replace the converted output with a manually edited version
    pub fn edit_output(&mut self, text: &str) {
        self.output = text.to_string();
    }

    /// Re-run the forward conversion over the current input, discarding edits
    pub fn reconvert(&mut self) {
        self.output = latex_to_markdown(&self.input);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// The current output mapped back to backslash delimiters (LaTeX export)
    pub fn latex_output(&self) -> String {
        markdown_to_latex(&self.output)
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Persist the current snapshot under `key`
    pub fn autosave(
        &self,
        provider: &dyn PersistenceProvider,
        key: &str,
    ) -> Result<(), ProviderError> {
        let snapshot = SessionSnapshot {
            input: self.input.clone(),
            output: self.output.clone(),
            display_mode: self.display_mode,
        };
        let payload = serde_json::to_string(&snapshot)
            .map_err(|e| ProviderError::Internal(e.to_string()))?;
        provider.store(key, &payload)
    }

    /// Restore a previously saved snapshot; returns whether one was found.
    ///
    /// Restoring replaces input, output, and display mode but leaves the
    /// history as is (the snapshot does not carry it).
    pub fn restore(
        &mut self,
        provider: &dyn PersistenceProvider,
        key: &str,
    ) -> Result<bool, ProviderError> {
        let Some(payload) = provider.load(key)? else {
            return Ok(false);
        };
        let snapshot: SessionSnapshot = serde_json::from_str(&payload)
            .map_err(|e| ProviderError::Internal(e.to_string()))?;
        self.input = snapshot.input;
        self.output = snapshot.output;
        self.display_mode = snapshot.display_mode;
        Ok(true)
    }
}
