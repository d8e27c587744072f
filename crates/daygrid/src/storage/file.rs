//! File-backed persistence adapter.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use daygrid_core::storage::{PersistenceAdapter, Result};

/// Key-value store persisted as a single JSON file.
///
/// The whole map is reread on `get` and rewritten on `set`; writes go
/// through a temp file in the same directory followed by a rename, so a
/// crash mid-write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created on the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_values(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PersistenceAdapter for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.read_values()?;
        Ok(values.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_values()?;
        values.insert(key.to_string(), value.to_string());

        let raw = serde_json::to_string_pretty(&values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("store.json"))
    }

    #[test]
    fn test_get_before_first_write() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("calendarEvents").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("calendarEvents", r#"{"5":[]}"#).unwrap();

        assert_eq!(
            store.get("calendarEvents").unwrap(),
            Some(r#"{"5":[]}"#.to_string())
        );
    }

    #[test]
    fn test_values_survive_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        FileStore::new(&path).set("calendarEvents", "{}").unwrap();
        let reopened = FileStore::new(&path);

        assert_eq!(
            reopened.get("calendarEvents").unwrap(),
            Some("{}".to_string())
        );
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("calendarEvents", "{}").unwrap();
        store.set("other", "value").unwrap();

        assert_eq!(store.get("calendarEvents").unwrap(), Some("{}".to_string()));
        assert_eq!(store.get("other").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("calendarEvents").is_err());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("calendarEvents", "{}").unwrap();

        assert!(!store.path().with_extension("tmp").exists());
    }
}
