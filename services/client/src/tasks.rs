//! services/client/src/tasks.rs
//!
//! Long-running subscriber tasks that stand in for the presentation layer:
//! they follow store snapshots and log what a screen would re-render.

use newshaven_core::{ContentState, SessionState};
use tokio::sync::watch;
use tracing::info;

/// Follows the content store until it is dropped.
pub async fn watch_content(mut rx: watch::Receiver<ContentState>) {
    info!("Content watcher started.");

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        let generating: Vec<&str> = state
            .history
            .iter()
            .filter(|summary| summary.is_generating)
            .map(|summary| summary.id.as_str())
            .collect();
        info!(
            summaries = state.history.len(),
            active = ?state.active_summary_id,
            loading = state.is_loading,
            generating = ?generating,
            "Content changed."
        );
    }

    info!("Content watcher stopped.");
}

/// Follows the session store until it is dropped.
pub async fn watch_session(mut rx: watch::Receiver<SessionState>) {
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        info!(
            user = ?state.user.as_ref().map(|user| user.email.as_str()),
            guard = ?state.route_guard(),
            "Session changed."
        );
    }
}
