use std::collections::HashMap;

use thiserror::Error;

use crate::models::LinkRecord;

/// The full persisted mapping from short code to link record.
pub type LinkMap = HashMap<String, LinkRecord>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write link store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize link store: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable mapping from short code to link record.
///
/// The whole mapping is the unit of durability: `load` reads the full
/// snapshot and `save` replaces it outright (last-writer-wins, no merge, no
/// partial writes). A missing or malformed snapshot loads as an empty
/// mapping rather than an error.
pub trait LinkStore: Send + Sync {
    fn load(&self) -> LinkMap;

    fn save(&self, links: &LinkMap) -> StoreResult<()>;
}
