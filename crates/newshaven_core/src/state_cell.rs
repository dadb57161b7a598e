//! crates/newshaven_core/src/state_cell.rs
//!
//! An observable state container with a persisted slice.
//!
//! Every change replaces the snapshot in one step through a `watch` channel, so
//! readers never see a half-applied update. After each change the persisted
//! slice is compared with the last one written and, if it differs, written to
//! storage before the mutating call returns.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::error;

use crate::domain::{ContentState, PersistedContent, PersistedSession, SessionState};
use crate::persistence::{self, CONTENT_STORAGE_KEY, SESSION_STORAGE_KEY};
use crate::ports::StateStorage;

/// A state type that knows which part of itself is durable.
pub trait PersistedState: Clone + Send + Sync + 'static {
    type Slice: Serialize + DeserializeOwned + PartialEq + Send;

    const STORAGE_KEY: &'static str;

    fn persisted(&self) -> Self::Slice;
    fn from_persisted(slice: Self::Slice) -> Self;
}

impl PersistedState for SessionState {
    type Slice = PersistedSession;

    const STORAGE_KEY: &'static str = SESSION_STORAGE_KEY;

    fn persisted(&self) -> PersistedSession {
        SessionState::persisted(self)
    }

    fn from_persisted(slice: PersistedSession) -> Self {
        SessionState::from_persisted(slice)
    }
}

impl PersistedState for ContentState {
    type Slice = PersistedContent;

    const STORAGE_KEY: &'static str = CONTENT_STORAGE_KEY;

    fn persisted(&self) -> PersistedContent {
        ContentState::persisted(self)
    }

    fn from_persisted(slice: PersistedContent) -> Self {
        ContentState::from_persisted(slice)
    }
}

pub(crate) struct StateCell<S: PersistedState> {
    sender: watch::Sender<S>,
    storage: Arc<dyn StateStorage>,
    /// The slice most recently handed to storage. Held while mutating so that
    /// writes reach storage in the same order as the snapshots they describe.
    last_persisted: Mutex<S::Slice>,
}

impl<S: PersistedState> StateCell<S> {
    /// Wraps `initial` without touching storage.
    pub(crate) fn new(initial: S, storage: Arc<dyn StateStorage>) -> Self {
        let last_persisted = Mutex::new(initial.persisted());
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            storage,
            last_persisted,
        }
    }

    /// Hydrates from storage, or starts from `fallback` when nothing usable is stored.
    pub(crate) fn restore(storage: Arc<dyn StateStorage>, fallback: S) -> Self {
        let initial = persistence::read_slice::<S::Slice>(storage.as_ref(), S::STORAGE_KEY)
            .map(S::from_persisted)
            .unwrap_or(fallback);
        Self::new(initial, storage)
    }

    pub(crate) fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Applies `change` as one atomic replacement.
    ///
    /// `change` returns whether it modified anything; subscribers are only
    /// notified, and storage only written, when it did.
    pub(crate) fn modify(&self, change: impl FnOnce(&mut S) -> bool) -> bool {
        let mut last_persisted = self
            .last_persisted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.sender.send_if_modified(change) {
            return false;
        }

        let slice = self.sender.borrow().persisted();
        if slice != *last_persisted {
            match persistence::write_slice(self.storage.as_ref(), S::STORAGE_KEY, &slice) {
                Ok(()) => *last_persisted = slice,
                Err(e) => error!(key = S::STORAGE_KEY, error = %e, "Failed to persist state."),
            }
        }
        true
    }
}
