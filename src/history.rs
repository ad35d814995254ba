//! Request history
//!
//! Most-recent-first log of past executions, capped at
//! [`MAX_HISTORY_ENTRIES`]. Entries are snapshots and never change after
//! they are pushed.

use std::collections::VecDeque;

use crate::types::HistoryEntry;

/// Maximum number of history entries to retain.
pub const MAX_HISTORY_ENTRIES: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Add an entry to the front, evicting the oldest entry once the list
    /// would exceed the cap.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > MAX_HISTORY_ENTRIES {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::debug!(id = evicted.id, url = %evicted.url, "history entry evicted");
            }
        }
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
