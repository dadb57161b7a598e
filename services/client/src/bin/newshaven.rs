//! services/client/src/bin/newshaven.rs

use client_lib::{
    adapters::FileStorage,
    config::Config,
    error::ClientError,
    state::AppState,
    tasks::{watch_content, watch_session},
};
use chrono::Utc;
use newshaven_core::catalog::{self, AVAILABLE_TOPICS};
use newshaven_core::{RouteGuard, SummaryConfig};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting client...");

    // --- 2. Open Storage & Restore Stores ---
    info!("Using storage directory {}", config.storage_dir.display());
    let storage = Arc::new(FileStorage::new(config.storage_dir.clone()));
    let app_state = AppState::new(config.clone(), storage);

    // --- 3. Subscribe the Stand-in Presentation Layer ---
    let content_watcher = tokio::spawn(watch_content(app_state.content.subscribe()));
    let session_watcher = tokio::spawn(watch_session(app_state.session.subscribe()));

    // --- 4. Log In ---
    if app_state.session.route_guard() != RouteGuard::Allow {
        let accepted = app_state
            .session
            .login(&config.demo_email, &config.demo_password)
            .await;
        if !accepted {
            warn!("Demo credentials were rejected.");
            return Err(ClientError::Internal("login rejected".to_string()));
        }
    }

    // --- 5. Create a Summary for the Last Week ---
    let mut summary_config = SummaryConfig::last_week(Utc::now().date_naive());
    summary_config.topics = AVAILABLE_TOPICS
        .iter()
        .filter(|topic| matches!(**topic, "Tecnología" | "Ciencia"))
        .map(|topic| topic.to_string())
        .collect();
    if let Some(language) = catalog::language(&summary_config.language) {
        info!(language = language.name, topics = ?summary_config.topics, "Requesting summary.");
    }
    let created = app_state.content.create_summary(summary_config).await?;
    info!(summary_id = %created.id, title = %created.title, "New summary selected.");

    // --- 6. Generate Podcasts Concurrently ---
    let mut targets = vec![created.id.clone()];
    if let Some(previous) = app_state.content.snapshot().history.get(1) {
        targets.push(previous.id.clone());
    }
    let results = futures::future::join_all(
        targets
            .iter()
            .map(|summary_id| app_state.content.generate_podcast(summary_id)),
    )
    .await;
    for result in results {
        match result {
            Ok(url) => info!(url = %url, "Podcast available."),
            Err(e) => warn!(error = %e, "Podcast generation failed."),
        }
    }

    // --- 7. Print the Final Snapshot & Log Out ---
    let snapshot = app_state.content.snapshot().persisted();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    app_state.session.logout();
    info!("Demo session finished.");

    drop(app_state);
    let (content_done, session_done) = tokio::join!(content_watcher, session_watcher);
    for (watcher, done) in [("content", content_done), ("session", session_done)] {
        if let Err(e) = done {
            error!(watcher, error = %e, "Store watcher ended abnormally.");
        }
    }
    Ok(())
}
