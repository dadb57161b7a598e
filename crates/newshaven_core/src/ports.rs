//! crates/newshaven_core/src/ports.rs
//!
//! Defines the service contracts (traits) the stores depend on.
//! These traits form the boundary of the hexagonal architecture: the stores
//! never sleep, touch the filesystem or read the clock themselves, so tests can
//! substitute instant, deterministic implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Summary, SummaryConfig, SummaryText, User};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., storage, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable key-value storage for persisted store slices.
///
/// Synchronous, like a browser's local storage: every state replacement is
/// written before the mutating call returns. Implementations doing blocking
/// I/O must not stall the async runtime they are called from.
#[cfg_attr(test, mockall::automock)]
pub trait StateStorage: Send + Sync {
    fn get_item(&self, key: &str) -> PortResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> PortResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Checks a credential pair. `Ok(None)` means the pair was rejected.
    async fn verify(&self, email: &str, password: &str) -> PortResult<Option<User>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Produces the title and body of a summary for the given request.
    async fn summarize(&self, config: &SummaryConfig) -> PortResult<SummaryText>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PodcastService: Send + Sync {
    /// Generates audio for a summary and returns a reference to it.
    async fn generate_podcast(&self, summary: &Summary) -> PortResult<String>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns an id that no other call has returned.
    fn next_id(&self) -> String;
}
