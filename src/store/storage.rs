//! Durable key-value storage for the persisted theme choice.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Error returned by a [`ThemeStorage`] backend.
#[derive(Debug)]
pub enum StorageError {
    /// The backend could not be read
    Read { message: String },
    /// The backend refused or failed a write
    Write { message: String },
    /// The on-disk document could not be encoded or decoded
    Serialize { message: String },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Read { message } => write!(f, "storage read failed: {}", message),
            StorageError::Write { message } => write!(f, "storage write failed: {}", message),
            StorageError::Serialize { message } => {
                write!(f, "storage document is malformed: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Client-side persistent key-value store that survives reloads.
///
/// Values are plain strings; the theme store only ever writes the theme
/// identifier under its configured key.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
///
/// Clones share the same entries, so a clone handed to a second store
/// behaves like the same browser storage seen after a reload.
///
/// # Example
///
/// ```rust
/// use showcase_theme::{MemoryStorage, ThemeStorage};
///
/// let mut storage = MemoryStorage::new();
/// let view = storage.clone();
/// storage.set("k", "g10").unwrap();
/// assert_eq!(view.get("k").unwrap().as_deref(), Some("g10"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    deny_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Makes every subsequent `set`/`remove` fail, like a sandboxed or
    /// quota-exhausted browser storage.
    pub fn deny_writes(&self, deny: bool) {
        self.deny_writes.set(deny);
    }

    /// Removes every entry, bypassing the write guard.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.deny_writes.get() {
            return Err(StorageError::Write {
                message: "storage is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object file.
///
/// A missing file reads as empty. Writes replace the file through a
/// sibling temp file so a crash never leaves a truncated document.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    message: format!("{}: {}", self.path.display(), e),
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| StorageError::Serialize {
            message: format!("{}: {}", self.path.display(), e),
        })
    }

    fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| StorageError::Serialize {
            message: e.to_string(),
        })?;
        let tmp = self.path.with_extension("tmp");
        let write_err = |e: io::Error| StorageError::Write {
            message: format!("{}: {}", self.path.display(), e),
        };
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }
}
