//! Write-only key-value persistence for the current page number.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when persisting a value.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access state file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode state file '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fire-and-forget key-value sink.
pub trait KeyValueStore: Send + Sync {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores all keys in a single JSON object file.
///
/// Every write is a read-modify-write under an exclusive lock on a sidecar
/// `<file>.lock`, so several viewers can share one state file. The new
/// content goes to `<file>.tmp` and is renamed over the state file, which
/// is never left truncated.
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                if !content.trim().is_empty() {
                    tracing::warn!(path = %self.path.display(), "Discarding unreadable state file: {}", err);
                }
                Ok(Map::new())
            }
        }
    }

    fn replace_contents(&self, encoded: &[u8]) -> Result<(), StorageError> {
        let tmp_path = self.sibling(".tmp");
        let written = File::create(&tmp_path).and_then(|mut tmp| {
            tmp.write_all(encoded)?;
            tmp.sync_all()
        });
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(err));
        }
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.io_error(e)
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.sibling(".lock"))
            .map_err(|e| self.io_error(e))?;
        lock.lock_exclusive().map_err(|e| self.io_error(e))?;

        let result = self.read_entries().and_then(|mut entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
            let encoded =
                serde_json::to_vec_pretty(&entries).map_err(|source| StorageError::Encode {
                    path: self.path.clone(),
                    source,
                })?;
            self.replace_contents(&encoded)
        });

        FileExt::unlock(&lock).map_err(|e| self.io_error(e))?;
        result
    }
}

/// In-process store, used with `--no-persist` and in tests.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Number of `set_item` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_keeps_latest_value() {
        let store = MemoryKeyValueStore::new();
        store.set_item("pageNumber", "1").unwrap();
        store.set_item("pageNumber", "2").unwrap();
        assert_eq!(store.get("pageNumber").as_deref(), Some("2"));
        assert_eq!(store.writes(), 2);
    }
}
