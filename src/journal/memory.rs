use std::sync::Mutex;

use serde_json::Value;

use crate::journal::{Journal, JournalResult};
use crate::models::{EventKind, LogEntry};

/// In-memory action log, the test double for the file backend.
#[derive(Default)]
pub struct MemoryJournal {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Journal for MemoryJournal {
    fn append(&self, kind: EventKind, payload: Value) -> JournalResult<LogEntry> {
        let entry = LogEntry::new(kind, payload);
        self.entries
            .lock()
            .expect("journal lock poisoned")
            .push(entry.clone());
        Ok(entry)
    }

    fn all(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("journal lock poisoned").clone()
    }

    fn clear(&self) -> JournalResult<()> {
        self.entries.lock().expect("journal lock poisoned").clear();
        Ok(())
    }
}
