// src/app/history.rs
use chrono::Utc;

use crate::db::{KeyValueStore, Result, HISTORY_KEY};
use crate::models::{HistoryEntry, StrengthLevel};

pub const MAX_HISTORY: usize = 10;

/// Most-recent-first list of generated passwords, bounded to `limit` entries.
pub struct HistoryStore<S> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    #[cfg(test)]
    pub fn new(store: S) -> Self {
        Self::with_limit(store, MAX_HISTORY)
    }

    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.store.get_json(HISTORY_KEY)?.unwrap_or_default())
    }

    /// Entry at a 1-based position, newest first.
    pub fn get(&self, position: usize) -> Result<Option<HistoryEntry>> {
        let entries = self.entries()?;
        Ok(position.checked_sub(1).and_then(|i| entries.into_iter().nth(i)))
    }

    pub fn add(&self, password: &str, strength: StrengthLevel) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            password: password.to_string(),
            strength,
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut history = self.entries()?;
        history.insert(0, entry.clone());
        history.truncate(self.limit);

        self.store.set_json(HISTORY_KEY, &history)?;
        Ok(entry)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY)?;
        log::info!("History cleared");
        Ok(())
    }
}
