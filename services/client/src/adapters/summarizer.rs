//! services/client/src/adapters/summarizer.rs
//!
//! This module contains the simulated summarizer.
//! It implements the `SummaryService` port by waiting a fixed delay and then
//! composing a deterministic title and body from the request.

use async_trait::async_trait;
use newshaven_core::ports::{PortResult, SummaryService};
use newshaven_core::{SummaryConfig, SummaryText};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SimulatedSummaryAdapter {
    latency: Duration,
}

impl SimulatedSummaryAdapter {
    /// Creates a new `SimulatedSummaryAdapter`.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SummaryService for SimulatedSummaryAdapter {
    async fn summarize(&self, config: &SummaryConfig) -> PortResult<SummaryText> {
        tokio::time::sleep(self.latency).await;
        Ok(SummaryText::compose(config))
    }
}
