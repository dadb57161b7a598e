//! Test doubles shared by the store tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::ports::{PortError, PortResult, StateStorage};

/// In-memory storage that also keeps every successful write in order.
#[derive(Default)]
pub(crate) struct RecordingStorage {
    items: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
    failing_writes: AtomicUsize,
}

impl RecordingStorage {
    /// Makes the next `count` writes fail without storing anything.
    pub(crate) fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub(crate) fn writes_for(&self, key: &str) -> Vec<serde_json::Value> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| serde_json::from_str(v).unwrap())
            .collect()
    }

    pub(crate) fn last_json(&self, key: &str) -> Option<serde_json::Value> {
        self.writes_for(key).pop()
    }
}

impl StateStorage for RecordingStorage {
    fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        let failing = self
            .failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(PortError::Unexpected("storage quota exceeded".to_string()));
        }
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Holds a port call open until the test releases it.
#[derive(Default)]
pub(crate) struct Gate {
    entered: Notify,
    released: Notify,
}

impl Gate {
    /// Called from inside the port: signals entry, then waits for release.
    pub(crate) async fn pass(&self) {
        self.entered.notify_one();
        self.released.notified().await;
    }

    pub(crate) async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    pub(crate) fn release(&self) {
        self.released.notify_one();
    }
}
