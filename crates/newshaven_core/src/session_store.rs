//! crates/newshaven_core/src/session_store.rs
//!
//! The single source of truth for "is someone logged in, and who".

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use crate::domain::{RouteGuard, SessionState, User};
use crate::ports::{CredentialVerifier, StateStorage};
use crate::state_cell::StateCell;

pub struct SessionStore {
    cell: StateCell<SessionState>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionStore {
    /// Creates a logged-out store without reading storage.
    pub fn new(storage: Arc<dyn StateStorage>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            cell: StateCell::new(SessionState::default(), storage),
            verifier,
        }
    }

    /// Creates a store hydrated from the persisted session, if any.
    pub fn restore(storage: Arc<dyn StateStorage>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let cell = StateCell::restore(storage, SessionState::default());
        if let Some(user) = &cell.snapshot().user {
            info!(user_id = %user.id, "Restored persisted session.");
        }
        Self { cell, verifier }
    }

    pub fn snapshot(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.cell.subscribe()
    }

    pub fn route_guard(&self) -> RouteGuard {
        self.cell.snapshot().route_guard()
    }

    /// Attempts to log in. Returns whether the credentials were accepted.
    ///
    /// A rejected attempt only clears the loading flag, so an existing session
    /// survives a failed re-login. Verifier failures count as a rejection.
    /// Not reentrant: callers must not start a second login while
    /// `is_loading` is set.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.cell.modify(|state| {
            state.is_loading = true;
            true
        });

        let user = match self.verifier.verify(email, password).await {
            Ok(user) => user,
            Err(e) => {
                error!(error = %e, "Credential verification failed.");
                None
            }
        };

        match user {
            Some(user) => {
                info!(user_id = %user.id, "Login succeeded.");
                self.cell.modify(|state| {
                    state.user = Some(user);
                    state.is_authenticated = true;
                    state.is_loading = false;
                    true
                });
                true
            }
            None => {
                info!("Login rejected.");
                self.cell.modify(|state| {
                    state.is_loading = false;
                    true
                });
                false
            }
        }
    }

    /// Clears the session. Calling it while logged out changes nothing.
    pub fn logout(&self) {
        let changed = self.cell.modify(|state| {
            let changed = state.user.is_some() || state.is_authenticated;
            state.user = None;
            state.is_authenticated = false;
            changed
        });
        if changed {
            info!("Logged out.");
        }
    }

    /// Installs `user` as the authenticated identity without any credential check.
    ///
    /// Only for restoring a session handed over by a trusted source.
    pub fn set_user(&self, user: User) {
        info!(user_id = %user.id, "Session identity set directly.");
        self.cell.modify(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
            true
        });
    }
}
