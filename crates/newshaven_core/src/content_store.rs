//! crates/newshaven_core/src/content_store.rs
//!
//! Owns the history of summaries and the two asynchronous workflows that
//! change it: creating a summary, and generating a podcast for one.
//!
//! Per summary the podcast lifecycle is `Idle -> Generating -> Idle` with a
//! `podcast_url` attached on success. Generating again for a finished summary
//! runs the cycle again and replaces the URL.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::domain::{ContentState, Summary, SummaryConfig};
use crate::ports::{Clock, IdGenerator, PodcastService, PortError, StateStorage, SummaryService};
use crate::state_cell::StateCell;

/// Errors reported by [`ContentStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Summary not found: {0}")]
    NotFound(String),
    #[error("Summary creation failed: {0}")]
    SummaryFailed(#[source] PortError),
    #[error("Podcast generation failed for summary {summary_id}: {source}")]
    GenerationFailed {
        summary_id: String,
        #[source]
        source: PortError,
    },
}

/// The services a [`ContentStore`] delegates to.
#[derive(Clone)]
pub struct ContentServices {
    pub summarizer: Arc<dyn SummaryService>,
    pub podcasts: Arc<dyn PodcastService>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
}

pub struct ContentStore {
    cell: StateCell<ContentState>,
    services: ContentServices,
}

impl ContentStore {
    /// Creates a store with an empty history without reading storage.
    pub fn new(storage: Arc<dyn StateStorage>, services: ContentServices) -> Self {
        Self {
            cell: StateCell::new(ContentState::default(), storage),
            services,
        }
    }

    /// Creates a store hydrated from the persisted history, or holding
    /// `initial_history` when nothing usable is stored.
    pub fn restore(
        storage: Arc<dyn StateStorage>,
        services: ContentServices,
        initial_history: Vec<Summary>,
    ) -> Self {
        let fallback = ContentState {
            history: initial_history,
            ..ContentState::default()
        };
        let cell = StateCell::restore(storage, fallback);
        info!(summaries = cell.snapshot().history.len(), "Content store ready.");
        Self { cell, services }
    }

    pub fn snapshot(&self) -> ContentState {
        self.cell.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.cell.subscribe()
    }

    pub fn summary(&self, summary_id: &str) -> Option<Summary> {
        self.cell.snapshot().summary(summary_id).cloned()
    }

    pub fn active_summary(&self) -> Option<Summary> {
        self.cell.snapshot().active_summary().cloned()
    }

    /// Creates a summary, puts it at the front of the history and selects it.
    ///
    /// The config is not validated. Not reentrant with respect to
    /// `is_loading`: overlapping calls both insert their summary, but the flag
    /// is cleared by whichever finishes first.
    pub async fn create_summary(&self, config: SummaryConfig) -> Result<Summary, ContentError> {
        self.cell.modify(|state| {
            state.is_loading = true;
            true
        });

        let text = match self.services.summarizer.summarize(&config).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Summary creation failed.");
                self.cell.modify(|state| {
                    state.is_loading = false;
                    true
                });
                return Err(ContentError::SummaryFailed(e));
            }
        };

        let summary = Summary {
            id: self.services.ids.next_id(),
            title: text.title,
            content: text.content,
            date: self.services.clock.now(),
            topics: config.topics,
            language: config.language,
            podcast_url: None,
            is_generating: false,
        };
        info!(summary_id = %summary.id, topics = ?summary.topics, "Summary created.");

        self.cell.modify(|state| {
            state.history.insert(0, summary.clone());
            state.active_summary_id = Some(summary.id.clone());
            state.is_loading = false;
            true
        });
        Ok(summary)
    }

    /// Generates a podcast for the summary with `summary_id` and returns its URL.
    ///
    /// Only records carrying that id are touched. An unknown id leaves the
    /// history unchanged and reports [`ContentError::NotFound`]. On failure the
    /// generating flag is cleared and any earlier podcast URL is kept.
    pub async fn generate_podcast(&self, summary_id: &str) -> Result<String, ContentError> {
        let mut target = None;
        self.cell.modify(|state| {
            for summary in state.history.iter_mut().filter(|s| s.id == summary_id) {
                summary.is_generating = true;
                target.get_or_insert_with(|| summary.clone());
            }
            target.is_some()
        });

        let Some(summary) = target else {
            warn!(summary_id, "Podcast requested for unknown summary.");
            return Err(ContentError::NotFound(summary_id.to_string()));
        };
        info!(summary_id, "Podcast generation started.");

        let result = self.services.podcasts.generate_podcast(&summary).await;

        let still_present = self.cell.modify(|state| {
            let mut matched = false;
            for summary in state.history.iter_mut().filter(|s| s.id == summary_id) {
                summary.is_generating = false;
                if let Ok(url) = &result {
                    summary.podcast_url = Some(url.clone());
                }
                matched = true;
            }
            matched
        });
        if !still_present {
            debug!(summary_id, "Summary disappeared during podcast generation.");
        }

        match result {
            Ok(url) => {
                info!(summary_id, url = %url, "Podcast ready.");
                Ok(url)
            }
            Err(e) => {
                error!(summary_id, error = %e, "Podcast generation failed.");
                Err(ContentError::GenerationFailed {
                    summary_id: summary_id.to_string(),
                    source: e,
                })
            }
        }
    }

    /// Selects a summary for display. The id is not checked against the history.
    pub fn set_active_summary(&self, summary_id: Option<String>) {
        self.cell.modify(|state| {
            let changed = state.active_summary_id != summary_id;
            state.active_summary_id = summary_id;
            changed
        });
    }

    /// Puts a caller-built summary at the front of the history.
    ///
    /// Nothing is validated and duplicate ids are accepted; this is meant for
    /// importing records from a trusted source.
    pub fn add_summary(&self, summary: Summary) {
        debug!(summary_id = %summary.id, "Summary added directly.");
        self.cell.modify(|state| {
            state.history.insert(0, summary);
            true
        });
    }
}
