//! Browser-style key-value storage.
//!
//! `KeyValueStore` is the raw string interface. The `*_local_storage`
//! helpers layer JSON encoding on top and never propagate failures: they log
//! and hand back a sentinel instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use ui_logging::{ui_debug, ui_error};

use crate::error::StorageError;
use crate::persist::AtomicFileWriter;

/// Key holding the role picked on the role-selection screen.
pub const SELECTED_ROLE_KEY: &str = "selectedRole";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. An optional byte quota makes writes fail the way a full
/// browser storage area does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk. Every write rewrites the
/// file atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    writer: AtomicFileWriter,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            writer: AtomicFileWriter::new(path.clone()),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(items).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        self.writer.write(&content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

/// JSON-encodes `data` under `key`. Returns false (and logs) on any failure.
pub fn save_to_local_storage<T>(store: &mut dyn KeyValueStore, key: &str, data: &T) -> bool
where
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(data)
        .map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })
        .and_then(|encoded| store.set_item(key, &encoded));
    match result {
        Ok(()) => {
            ui_debug!("Saved {key:?} to local storage");
            true
        }
        Err(err) => {
            ui_error!("Error saving to localStorage: {err}");
            false
        }
    }
}

/// Reads and decodes `key`. Missing, empty or undecodable entries yield
/// `default`.
pub fn load_from_local_storage<T>(store: &dyn KeyValueStore, key: &str, default: T) -> T
where
    T: DeserializeOwned,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return default,
        Err(err) => {
            ui_error!("Error loading from localStorage: {err}");
            return default;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            ui_error!("Error loading from localStorage: {key:?} is not valid JSON: {err}");
            default
        }
    }
}

pub fn remove_from_local_storage(store: &mut dyn KeyValueStore, key: &str) -> bool {
    match store.remove_item(key) {
        Ok(()) => true,
        Err(err) => {
            ui_error!("Error removing from localStorage: {err}");
            false
        }
    }
}
