/// Key-value persistence seam.
///
/// The whole collection lives under one key as a JSON array of
/// `{title, score, comparisons}` records.
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ElomaticError, Result, StoreError};
use crate::types::Item;

/// Minimal blob store: `get` returns `None` when the key was never written.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        // Write-then-rename so a crash mid-write never leaves a truncated blob.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Read the collection stored under `key`. Absent key means an empty collection.
pub fn load_items<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Vec<Item>> {
    match store.get(key)? {
        None => {
            debug!(key, "No stored items, starting empty");
            Ok(Vec::new())
        }
        Some(raw) => {
            let items: Vec<Item> = serde_json::from_str(&raw).map_err(ElomaticError::Deserialization)?;
            debug!(key, count = items.len(), "Loaded items");
            Ok(items)
        }
    }
}

/// Serialize and write the whole collection under `key`.
pub fn save_items<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, items: &[Item]) -> Result<()> {
    let raw = serde_json::to_string(items).map_err(StoreError::from)?;
    store.set(key, &raw)?;
    debug!(key, count = items.len(), "Saved items");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_absent_key() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());
        assert!(load_items(&store, "missing").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let items = vec![Item::with_state("Alpha", 1516, 1), Item::new("Beta")];
        save_items(&mut store, "k", &items).unwrap();
        assert_eq!(load_items(&store, "k").unwrap(), items);
    }

    #[test]
    fn test_reads_records_written_by_hand() {
        let mut store = MemoryStore::new();
        store
            .set("k", r#"[{"title":"Tea","score":1484,"comparisons":2}]"#)
            .unwrap();
        let items = load_items(&store, "k").unwrap();
        assert_eq!(items, vec![Item::with_state("Tea", 1484, 2)]);
    }

    #[test]
    fn test_malformed_data_is_deserialization_error() {
        let mut store = MemoryStore::new();
        store.set("k", r#"{"not": "a list"}"#).unwrap();
        let err = load_items(&store, "k").unwrap_err();
        assert!(matches!(err, ElomaticError::Deserialization(_)));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert!(store.get("k").unwrap().is_none());

        let items = vec![Item::with_state("Gamma", 1490, 7)];
        save_items(&mut store, "k", &items).unwrap();

        assert!(dir.path().join("nested").join("k.json").exists());
        assert!(!dir.path().join("nested").join("k.json.tmp").exists());
        assert_eq!(load_items(&store, "k").unwrap(), items);
    }

    #[test]
    fn test_file_store_read_error_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the blob file should be makes the read fail.
        std::fs::create_dir_all(dir.path().join("k.json")).unwrap();
        let store = FileStore::new(dir.path());
        let err = load_items(&store, "k").unwrap_err();
        assert!(matches!(err, ElomaticError::Persistence(StoreError::Io(_))));
    }
}
