use std::sync::Mutex;

use crate::storage::{LinkMap, LinkStore, StoreResult};

/// In-memory link store, the test double for the file backend.
#[derive(Default)]
pub struct MemoryStore {
    links: Mutex<LinkMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for MemoryStore {
    fn load(&self) -> LinkMap {
        self.links.lock().expect("store lock poisoned").clone()
    }

    fn save(&self, links: &LinkMap) -> StoreResult<()> {
        *self.links.lock().expect("store lock poisoned") = links.clone();
        Ok(())
    }
}
