//! Key-value persistence for settings.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{WkError, WkResult};

/// A string key-value store.
pub trait SettingsStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> WkResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> WkResult<()>;
}

/// An in-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> WkResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> WkResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store backed by a single JSON object file.
///
/// A missing file reads as an empty store. Every `put` writes a sibling
/// temp file and renames it over the old one, so readers see either the
/// previous contents or the new ones.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file is not touched yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> WkResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| WkError::Storage(format!("cannot read {}: {e}", self.path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| WkError::Storage(format!("malformed {}: {e}", self.path.display())))
    }

    fn replace_file(&self, contents: &[u8]) -> WkResult<()> {
        write_atomically(&self.path, contents)
            .map_err(|e| WkError::Storage(format!("cannot write {}: {e}", self.path.display())))
    }
}

/// Write `contents` to a temp file next to `path`, then rename it into place.
fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> WkResult<Option<String>> {
        tracing::debug!(path = %self.path.display(), key, "reading store");
        Ok(self.read_all()?.remove(key))
    }

    fn put(&mut self, key: &str, value: &str) -> WkResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&entries)
            .map_err(|e| WkError::Storage(format!("cannot encode store: {e}")))?;
        self.replace_file(raw.as_bytes())?;
        tracing::debug!(path = %self.path.display(), key, "wrote store");
        Ok(())
    }
}
