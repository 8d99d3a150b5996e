use serde_json::Value;
use thiserror::Error;

use crate::models::{EventKind, LogEntry};

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to write action log: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize action log: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type JournalResult<T> = Result<T, JournalError>;

/// Append-only action log.
///
/// Entries are never mutated after append; the only other write is clearing
/// the whole sequence. Growth is uncapped.
pub trait Journal: Send + Sync {
    /// Append a new entry with a fresh id and current timestamp, returning
    /// the entry as stored.
    fn append(&self, kind: EventKind, payload: Value) -> JournalResult<LogEntry>;

    /// Full sequence in append order. Malformed persisted data reads as
    /// empty.
    fn all(&self) -> Vec<LogEntry>;

    /// Reset to the empty sequence.
    fn clear(&self) -> JournalResult<()>;
}
