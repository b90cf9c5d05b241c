mod sqlite_store;

pub use sqlite_store::{SqliteStore, GEONOTES_DIR};

use std::collections::HashMap;

use crate::error::Result;

/// Key under which the note collection is persisted.
pub const NOTES_KEY: &str = "notes";
/// Key under which the title is persisted.
pub const TITLE_KEY: &str = "title";

/// String key-value durability layer.
///
/// Writes to different keys are independent; there is no transaction
/// spanning several keys.
pub trait PersistentStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, mostly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersistentStore for MemoryStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.load(NOTES_KEY).unwrap().is_none());

        store.save(NOTES_KEY, "[]").unwrap();
        assert_eq!(store.load(NOTES_KEY).unwrap().as_deref(), Some("[]"));

        store.save(NOTES_KEY, "[1]").unwrap();
        assert_eq!(store.load(NOTES_KEY).unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_clear_is_per_key() {
        let mut store = MemoryStore::new();
        store.save(NOTES_KEY, "[]").unwrap();
        store.save(TITLE_KEY, "\"Trip\"").unwrap();

        store.clear(NOTES_KEY).unwrap();
        assert!(store.load(NOTES_KEY).unwrap().is_none());
        assert!(store.load(TITLE_KEY).unwrap().is_some());

        // Clearing a missing key is fine
        store.clear(NOTES_KEY).unwrap();
    }
}
