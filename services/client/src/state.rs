//! services/client/src/state.rs
//!
//! Defines the application's shared state: the configuration and the two
//! stores, wired to their adapters.

use crate::adapters::{
    DemoCredentialVerifier, SimulatedPodcastAdapter, SimulatedSummaryAdapter, SystemClock,
    UuidIdGenerator,
};
use crate::config::Config;
use chrono::Utc;
use newshaven_core::catalog::{demo_history, demo_user};
use newshaven_core::ports::StateStorage;
use newshaven_core::{ContentServices, ContentStore, SessionStore};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Consumers)
//=========================================================================================

/// Created once at startup and handed to everything that reads or drives the stores.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<SessionStore>,
    pub content: Arc<ContentStore>,
}

impl AppState {
    /// Builds both stores on top of `storage`, hydrating whatever it already holds.
    pub fn new(config: Arc<Config>, storage: Arc<dyn StateStorage>) -> Self {
        let verifier = Arc::new(DemoCredentialVerifier::new(
            config.demo_email.clone(),
            config.demo_password.clone(),
            demo_user(),
            config.login_latency,
        ));
        let session = Arc::new(SessionStore::restore(storage.clone(), verifier));

        let services = ContentServices {
            summarizer: Arc::new(SimulatedSummaryAdapter::new(config.summary_latency)),
            podcasts: Arc::new(SimulatedPodcastAdapter::new(config.podcast_latency)),
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidIdGenerator),
        };
        let initial_history = if config.seed_demo_history {
            demo_history(Utc::now())
        } else {
            Vec::new()
        };
        let content = Arc::new(ContentStore::restore(storage, services, initial_history));

        Self {
            config,
            session,
            content,
        }
    }
}
