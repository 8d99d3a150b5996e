use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::journal::{Journal, JournalResult};
use crate::models::{EventKind, LogEntry};

/// Action log persisted as a single JSON array blob on disk.
///
/// Appends are read-then-write-whole: the full sequence is loaded, extended,
/// and written back.
pub struct JsonFileJournal {
    path: PathBuf,
}

impl JsonFileJournal {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Vec<LogEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed action log blob, starting empty"
                );
                Vec::new()
            }
        }
    }

    fn write_entries(&self, entries: &[LogEntry]) -> JournalResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Journal for JsonFileJournal {
    fn append(&self, kind: EventKind, payload: Value) -> JournalResult<LogEntry> {
        let mut entries = self.read_entries();
        let entry = LogEntry::new(kind, payload);
        entries.push(entry.clone());
        self.write_entries(&entries)?;
        Ok(entry)
    }

    fn all(&self) -> Vec<LogEntry> {
        self.read_entries()
    }

    fn clear(&self) -> JournalResult<()> {
        self.write_entries(&[])
    }
}
