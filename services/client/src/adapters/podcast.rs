//! services/client/src/adapters/podcast.rs
//!
//! This module contains the simulated podcast generator.
//! It implements the `PodcastService` port: no audio is synthesized, the
//! adapter waits a fixed delay and returns the placeholder reference.

use async_trait::async_trait;
use newshaven_core::domain::podcast_url_for;
use newshaven_core::ports::{PodcastService, PortResult};
use newshaven_core::Summary;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct SimulatedPodcastAdapter {
    latency: Duration,
}

impl SimulatedPodcastAdapter {
    /// Creates a new `SimulatedPodcastAdapter`.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PodcastService for SimulatedPodcastAdapter {
    async fn generate_podcast(&self, summary: &Summary) -> PortResult<String> {
        debug!(summary_id = %summary.id, words = summary.content.split_whitespace().count(), "Synthesizing podcast.");
        tokio::time::sleep(self.latency).await;
        Ok(podcast_url_for(&summary.id))
    }
}
