//! End-to-end flows through both stores with the simulated adapters wired in.

use chrono::NaiveDate;
use client_lib::adapters::{FileStorage, MemoryStorage};
use client_lib::config::Config;
use client_lib::state::AppState;
use newshaven_core::catalog::{demo_user, DEMO_EMAIL, DEMO_PASSWORD};
use newshaven_core::ports::StateStorage;
use newshaven_core::{DateRange, PodcastStatus, RouteGuard, SummaryConfig};
use std::sync::Arc;

fn instant_config(seed_demo_history: bool) -> Arc<Config> {
    let config = Config::from_lookup(|name| match name {
        "LOGIN_LATENCY_MS" | "SUMMARY_LATENCY_MS" | "PODCAST_LATENCY_MS" => Some("0".to_string()),
        "SEED_DEMO_HISTORY" => Some(seed_demo_history.to_string()),
        _ => None,
    })
    .expect("config");
    Arc::new(config)
}

fn tech_week() -> SummaryConfig {
    SummaryConfig {
        topics: vec!["Tecnología".to_string()],
        date_range: DateRange {
            from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        },
        language: "es".to_string(),
    }
}

#[tokio::test]
async fn demo_login_then_rejected_login() {
    let app = AppState::new(instant_config(false), Arc::new(MemoryStorage::new()));

    assert!(!app.session.login("x@x.com", "wrong").await);
    assert!(!app.session.snapshot().is_authenticated);

    assert!(app.session.login(DEMO_EMAIL, DEMO_PASSWORD).await);
    assert_eq!(app.session.snapshot().user, Some(demo_user()));

    assert!(!app.session.login("x@x.com", "wrong").await);
    assert!(app.session.snapshot().is_authenticated);

    app.session.logout();
    assert_eq!(app.session.route_guard(), RouteGuard::RedirectToLogin);
}

#[tokio::test]
async fn summary_then_podcast_from_empty_history() {
    let app = AppState::new(instant_config(false), Arc::new(MemoryStorage::new()));
    assert!(app.content.snapshot().history.is_empty());

    let created = app.content.create_summary(tech_week()).await.unwrap();

    let state = app.content.snapshot();
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].topics, vec!["Tecnología".to_string()]);
    assert_eq!(state.active_summary_id.as_deref(), Some(state.history[0].id.as_str()));
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());

    let url = app.content.generate_podcast(&created.id).await.unwrap();
    assert_eq!(url, format!("/api/podcasts/{}.mp3", created.id));
    assert_eq!(
        app.content.summary(&created.id).unwrap().podcast_status(),
        PodcastStatus::Ready(url.as_str())
    );
}

#[tokio::test]
async fn seeded_history_is_used_only_on_first_start() {
    let storage: Arc<dyn StateStorage> = Arc::new(MemoryStorage::new());

    let first = AppState::new(instant_config(true), storage.clone());
    let seeded: Vec<String> = first.content.snapshot().history.into_iter().map(|s| s.id).collect();
    assert_eq!(seeded, vec!["1", "2", "3"]);
    first.content.create_summary(tech_week()).await.unwrap();
    drop(first);

    let second = AppState::new(instant_config(true), storage);
    assert_eq!(second.content.snapshot().history.len(), 4);
}

#[tokio::test]
async fn file_storage_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first = AppState::new(instant_config(false), Arc::new(FileStorage::new(dir.path())));
    assert!(first.session.login(DEMO_EMAIL, DEMO_PASSWORD).await);
    let created = first.content.create_summary(tech_week()).await.unwrap();
    first.content.generate_podcast(&created.id).await.unwrap();
    drop(first);

    let raw = std::fs::read_to_string(dir.path().join("news-storage.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["version"], 0);
    assert_eq!(document["state"]["activeSummaryId"], created.id.as_str());

    let second = AppState::new(instant_config(false), Arc::new(FileStorage::new(dir.path())));
    assert_eq!(second.session.snapshot().user, Some(demo_user()));
    let restored = second.content.active_summary().unwrap();
    assert_eq!(restored.id, created.id);
    assert!(restored.podcast_url.is_some());
}

#[tokio::test]
async fn corrupt_storage_falls_back_to_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item("session-storage", "{\"state\":").unwrap();
    storage.set_item("news-storage", "[]").unwrap();

    let app = AppState::new(instant_config(false), storage);

    assert!(!app.session.snapshot().is_authenticated);
    assert!(app.content.snapshot().history.is_empty());
}
