//! Typed collection store
//!
//! Reads and writes whole named collections as structured values. Absence
//! comes back as `Ok(None)`; a present-but-unparseable entry is a `Parse`
//! error the caller must catch and heal with its seed default. That
//! fallback deliberately lives at each call site rather than here, so a
//! corrupt collection can never stop a different one from rendering.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::storage::backend::{FileBackend, MemoryBackend, StorageBackend};

/// Typed adapter over a raw key-value backend
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// File-backed store rooted at the given directory
    pub fn file_backed(root: PathBuf) -> Result<Self> {
        let backend = FileBackend::new(root);
        backend.initialize()?;
        Ok(Self::new(Arc::new(backend)))
    }

    /// Volatile store for tests
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Read the full collection stored under `key`
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            Some(text) => {
                let value = serde_json::from_str(&text)?;
                tracing::debug!("Read collection: {} ({} bytes)", key, text.len());
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and overwrite the full collection under `key`
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.backend.set(key, &text)
    }

    /// Delete the entry under `key`
    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Event;
    use crate::seed;

    #[test]
    fn read_absent_collection_is_none() {
        let store = Store::in_memory();
        let events: Option<Vec<Event>> = store.read("krc_events").unwrap();
        assert!(events.is_none());
    }

    #[test]
    fn write_then_read_is_deep_equal() {
        let store = Store::in_memory();
        let events = seed::default_events();

        store.write("krc_events", &events).unwrap();
        let read: Vec<Event> = store.read("krc_events").unwrap().unwrap();

        assert_eq!(read, events);
    }

    #[test]
    fn corrupt_entry_is_a_parse_error_not_a_panic() {
        let backend = MemoryBackend::new();
        backend.set("krc_events", "this is not JSON {").unwrap();
        let store = Store::new(Arc::new(backend));

        let result: Result<Option<Vec<Event>>> = store.read("krc_events");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn remove_clears_the_entry() {
        let store = Store::in_memory();
        store.write("krc_user", &"someone").unwrap();
        store.remove("krc_user").unwrap();

        let session: Option<String> = store.read("krc_user").unwrap();
        assert!(session.is_none());
    }
}
