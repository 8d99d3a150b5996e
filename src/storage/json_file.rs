use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{LinkMap, LinkStore, StoreResult};

/// Link store persisted as a single JSON object blob on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LinkStore for JsonFileStore {
    fn load(&self) -> LinkMap {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return LinkMap::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(links) => links,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed link store blob, starting empty"
                );
                LinkMap::new()
            }
        }
    }

    fn save(&self, links: &LinkMap) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(links)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
