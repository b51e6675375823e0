use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use dinnerwheel_shared::{Error, PersistentStore, Result};

/// A [`PersistentStore`] backed by a single JSON object file.
///
/// Entries load once at open; every `set`/`remove` rewrites the whole file
/// before returning, so any later read of the same key within the session
/// sees the latest write. One logical writer is assumed.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, path = %path.display(), "store file unreadable, starting empty");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(Error::Storage(err.to_string())),
        };

        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| Error::Storage(err.to_string()))?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| Error::Storage(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| Error::Storage(err.to_string()))
    }
}

impl PersistentStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.child("store.json")).unwrap();
        assert_eq!(store.get("dinners").unwrap(), None);
    }

    #[test]
    fn test_writes_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("dinners", r#"["Pizza"]"#).unwrap();
        drop(store);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("dinners").unwrap().as_deref(), Some(r#"["Pizza"]"#));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("store.json");
        fs::write(&path, "{{{{").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("dinners").unwrap(), None);
    }

    #[test]
    fn test_remove_deletes_the_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("dinners", "[]").unwrap();
        store.remove("dinners").unwrap();
        drop(store);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("dinners").unwrap(), None);
    }
}
