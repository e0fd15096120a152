//! Bounded conversion history
//!
//! Keeps the most recent N `(input, output)` pairs keyed by timestamp. The
//! transcoder never touches this; the session records entries and a
//! `PersistenceProvider` stores them as JSON.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::providers::PersistenceProvider;
use crate::utils::error::ProviderError;

/// Default retention when none is given
pub const DEFAULT_CAPACITY: usize = 50;

/// One recorded conversion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub input: String,
    pub output: String,
}

/// Most-recent-N ring of conversions
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a conversion, evicting the oldest entry when full
    pub fn record(&mut self, input: &str, output: &str) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            timestamp: Utc::now(),
            input: input.to_string(),
            output: output.to_string(),
        });
    }

    /// Entries oldest-first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize and store the history under `key`
    pub fn save(&self, provider: &dyn PersistenceProvider, key: &str) -> Result<(), ProviderError> {
        let entries: Vec<&HistoryEntry> = self.entries.iter().collect();
        let payload = serde_json::to_string(&entries)
            .map_err(|e| ProviderError::Internal(e.to_string()))?;
        provider.store(key, &payload)
    }

    /// Load a previously saved history; a missing key yields an empty history
    pub fn load(
        provider: &dyn PersistenceProvider,
        key: &str,
        capacity: usize,
    ) -> Result<Self, ProviderError> {
        let mut history = History::new(capacity);
        if let Some(payload) = provider.load(key)? {
            let entries: Vec<HistoryEntry> = serde_json::from_str(&payload)
                .map_err(|e| ProviderError::Internal(e.to_string()))?;
            // Re-apply the bound in case the stored run used a larger one.
            for entry in entries.into_iter() {
                if history.entries.len() == history.capacity {
                    history.entries.pop_front();
                }
                history.entries.push_back(entry);
            }
        }
        Ok(history)
    }
}
