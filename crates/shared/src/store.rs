use std::collections::HashMap;

use crate::Result;

/// A string-keyed durable store. Implementations must tolerate missing keys
/// and flush each write before returning, so a later `get` of the same key
/// always observes the most recent `set`.
pub trait PersistentStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload an entry, e.g. a legacy-shaped list.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("dinners").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.set("dinners", "[]").unwrap();
        assert_eq!(store.get("dinners").unwrap().as_deref(), Some("[]"));

        store.remove("dinners").unwrap();
        assert_eq!(store.get("dinners").unwrap(), None);
    }
}
