//! crates/newshaven_core/src/persistence.rs
//!
//! Reading and writing persisted store slices through a [`StateStorage`].
//!
//! Each store owns one document, keyed by its store name and wrapped in a
//! versioned envelope: `{"state": <slice>, "version": 0}`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ports::{PortError, PortResult, StateStorage};

pub const SESSION_STORAGE_KEY: &str = "session-storage";
pub const CONTENT_STORAGE_KEY: &str = "news-storage";

/// Bumped whenever a slice layout changes incompatibly.
pub const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedDocument<T> {
    pub state: T,
    pub version: u32,
}

/// Loads a slice, falling back to `None` on any problem.
///
/// A missing, unreadable, corrupt or outdated document all mean "start from
/// defaults"; none of them is an error for the caller.
pub fn read_slice<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No persisted document, starting from defaults.");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted document.");
            return None;
        }
    };

    match serde_json::from_str::<PersistedDocument<T>>(&raw) {
        Ok(document) if document.version == STORAGE_VERSION => Some(document.state),
        Ok(document) => {
            warn!(
                key,
                found = document.version,
                expected = STORAGE_VERSION,
                "Discarding persisted document with unsupported version."
            );
            None
        }
        Err(e) => {
            warn!(key, error = %e, "Discarding unparsable persisted document.");
            None
        }
    }
}

pub fn write_slice<T: Serialize>(storage: &dyn StateStorage, key: &str, state: &T) -> PortResult<()> {
    let document = PersistedDocument {
        state,
        version: STORAGE_VERSION,
    };
    let raw = serde_json::to_string(&document).map_err(|e| PortError::Unexpected(e.to_string()))?;
    storage.set_item(key, &raw)
}
