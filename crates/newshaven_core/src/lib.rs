pub mod catalog;
pub mod content_store;
pub mod domain;
pub mod persistence;
pub mod ports;
pub mod session_store;
mod state_cell;

#[cfg(test)]
mod testing;

pub use content_store::{ContentError, ContentServices, ContentStore};
pub use domain::{
    ContentState, DateRange, PersistedContent, PersistedSession, PodcastStatus, RouteGuard,
    SessionState, Summary, SummaryConfig, SummaryText, User,
};
pub use ports::{
    Clock, CredentialVerifier, IdGenerator, PodcastService, PortError, PortResult, StateStorage,
    SummaryService,
};
pub use session_store::SessionStore;
pub use state_cell::PersistedState;
