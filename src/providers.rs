//! Host-capability providers for clipboard access and session persistence
//!
//! The transcoder core has zero dependency on a host runtime; clipboard and
//! storage are side-effecting, environment-specific operations injected as
//! trait objects. Implementations:
//! - `Memory*`: in-memory storage (testing, WASM with preloaded state)
//! - `Std*`: real filesystem persistence (CLI)
//! - `Noop*`: every operation reports `NotSupported` (restricted environments)

use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::utils::error::ProviderError;

/// Trait for reading and writing the host clipboard
pub trait ClipboardProvider: Send + Sync {
    /// Read the current clipboard contents
    fn read(&self) -> Result<String, ProviderError>;

    /// Replace the clipboard contents
    fn write(&self, text: &str) -> Result<(), ProviderError>;
}

/// Trait for persisting keyed text payloads (autosave, history)
pub trait PersistenceProvider: Send + Sync {
    /// Load the payload stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>, ProviderError>;

    /// Store `value` under `key`, replacing any previous payload
    fn store(&self, key: &str, value: &str) -> Result<(), ProviderError>;

    /// Remove the payload stored under `key`
    fn remove(&self, key: &str) -> Result<(), ProviderError>;
}

/// In-memory clipboard (for testing and embedding)
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: &str) -> Self {
        Self {
            contents: Mutex::new(text.to_string()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read(&self) -> Result<String, ProviderError> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| ProviderError::Internal("poisoned clipboard lock".to_string()))
    }

    fn write(&self, text: &str) -> Result<(), ProviderError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ProviderError::Internal("poisoned clipboard lock".to_string()))?;
        *guard = text.to_string();
        Ok(())
    }
}

/// No-op clipboard (for environments without clipboard access)
pub struct NoopClipboard;

impl ClipboardProvider for NoopClipboard {
    fn read(&self) -> Result<String, ProviderError> {
        Err(ProviderError::NotSupported(
            "clipboard access is not available in this environment".to_string(),
        ))
    }

    fn write(&self, _text: &str) -> Result<(), ProviderError> {
        Err(ProviderError::NotSupported(
            "clipboard access is not available in this environment".to_string(),
        ))
    }
}

/// In-memory persistence (for testing and WASM with preloaded state)
#[derive(Default)]
pub struct MemoryPersistence {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, ProviderError> {
        self.entries
            .lock()
            .map_err(|_| ProviderError::Internal("poisoned persistence lock".to_string()))
    }
}

impl PersistenceProvider for MemoryPersistence {
    fn load(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ProviderError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Filesystem persistence, one file per key under a base directory (CLI)
#[cfg(not(target_arch = "wasm32"))]
pub struct StdPersistence {
    base_directory: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl StdPersistence {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_directory: base_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are flat identifiers; path separators would escape the base dir.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_directory.join(format!("{}.json", safe))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PersistenceProvider for StdPersistence {
    fn load(&self, key: &str) -> Result<Option<String>, ProviderError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(Some(contents))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        std::fs::create_dir_all(&self.base_directory)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ProviderError> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// No-op persistence (nothing is ever stored)
pub struct NoopPersistence;

impl PersistenceProvider for NoopPersistence {
    fn load(&self, _key: &str) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    fn store(&self, _key: &str, _value: &str) -> Result<(), ProviderError> {
        Err(ProviderError::NotSupported(
            "persistence is not available in this environment".to_string(),
        ))
    }

    fn remove(&self, _key: &str) -> Result<(), ProviderError> {
        Ok(())
    }
}
