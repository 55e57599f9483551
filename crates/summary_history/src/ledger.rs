use std::collections::VecDeque;

use crate::HistoryEntry;

/// Maximum number of retained entries; older entries are evicted first.
pub const HISTORY_CAP: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("history position {position} is out of range (len {len})")]
    IndexOutOfRange { position: usize, len: usize },
}

/// Append-only, capacity-bounded log of past requests.
///
/// Insertion order is significant. Reads and deletes address entries in
/// *display order*, most-recent-first, matching how a history view renders
/// them. All mutation takes `&mut self`, so concurrent callers must wrap the
/// ledger in their own exclusive guard.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        HistoryLedger {
            entries: VecDeque::with_capacity(HISTORY_CAP),
        }
    }

    /// Adds an entry at the end, evicting from the front until the ledger is
    /// back within [`HISTORY_CAP`].
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAP {
            let evicted = self.entries.pop_front();
            if let Some(evicted) = evicted {
                tracing::debug!(timestamp = %evicted.timestamp, "Evicted oldest history entry");
            }
        }
    }

    /// Removes and returns the entry at `position` in display order
    /// (0 = most recent). The ledger is left untouched on error.
    pub fn delete(&mut self, position: usize) -> Result<HistoryEntry, LedgerError> {
        let len = self.entries.len();
        if position >= len {
            return Err(LedgerError::IndexOutOfRange { position, len });
        }
        self.entries
            .remove(len - 1 - position)
            .ok_or(LedgerError::IndexOutOfRange { position, len })
    }

    /// Read-only snapshot, most-recent-first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
