//! services/client/src/adapters/storage.rs
//!
//! Adapters implementing the `StateStorage` port: one JSON file per key on
//! disk, and a purely in-memory map.
//!
//! The port is synchronous, so `FileStorage` cannot await `tokio::fs`. When it
//! is called from a multi-threaded tokio worker it runs its blocking file I/O
//! under `block_in_place`, which hands the worker's other tasks to another
//! thread for the duration of the write.

use newshaven_core::ports::{PortError, PortResult, StateStorage};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::debug;

/// Runs blocking I/O without stalling a multi-threaded runtime worker.
fn run_blocking<T>(io: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(io)
        }
        _ => io(),
    }
}

//=========================================================================================
// File Storage
//=========================================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a new `FileStorage`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PortResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PortError::Unexpected(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StateStorage for FileStorage {
    fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        let path = self.path_for(key)?;
        match run_blocking(|| std::fs::read_to_string(&path)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortError::Unexpected(e.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        let path = self.path_for(key)?;
        // Write to a sibling file first so a crash never leaves a torn document.
        let tmp = path.with_extension("json.tmp");
        run_blocking(|| {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(&tmp, value)?;
            std::fs::rename(&tmp, &path)
        })
        .map_err(|e| PortError::Unexpected(e.to_string()))?;
        debug!(key, path = %path.display(), bytes = value.len(), "Persisted document.");
        Ok(())
    }
}

//=========================================================================================
// Memory Storage
//=========================================================================================

/// Keeps documents for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
