//! crates/newshaven_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs carry no I/O. Their serde layout is the persisted JSON layout,
//! so field names are camelCase on the wire.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Session
//=========================================================================================

/// The identity of a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique, used as the login credential.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The full in-memory authentication state.
///
/// `is_authenticated` is true exactly when `user` is present. `is_loading` is
/// true only while a login attempt is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// The part of [`SessionState`] that is written to durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// What a protected screen should do given the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// A login attempt is in flight; render a placeholder.
    Pending,
    Allow,
    RedirectToLogin,
}

impl SessionState {
    /// Rebuilds a session from its persisted slice.
    ///
    /// The authenticated flag is derived from the presence of a user, so a
    /// tampered or stale document can never yield a user-less authenticated
    /// session.
    pub fn from_persisted(slice: PersistedSession) -> Self {
        let is_authenticated = slice.user.is_some();
        Self {
            user: slice.user,
            is_authenticated,
            is_loading: false,
        }
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    pub fn route_guard(&self) -> RouteGuard {
        if self.is_loading {
            RouteGuard::Pending
        } else if self.is_authenticated {
            RouteGuard::Allow
        } else {
            RouteGuard::RedirectToLogin
        }
    }
}

//=========================================================================================
// Content
//=========================================================================================

/// A stored digest covering a set of topics over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub topics: Vec<String>,
    /// ISO language code, e.g. `es`.
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podcast_url: Option<String>,
    /// True only while podcast generation is in flight for this record.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_generating: bool,
}

/// Where a summary sits in its podcast lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodcastStatus<'a> {
    Idle,
    Generating,
    Ready(&'a str),
}

impl Summary {
    pub fn podcast_status(&self) -> PodcastStatus<'_> {
        match (self.is_generating, self.podcast_url.as_deref()) {
            (true, _) => PodcastStatus::Generating,
            (false, Some(url)) => PodcastStatus::Ready(url),
            (false, None) => PodcastStatus::Idle,
        }
    }
}

/// The placeholder audio reference attached to a summary once its podcast exists.
pub fn podcast_url_for(summary_id: &str) -> String {
    format!("/api/podcasts/{}.mp3", summary_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// The user's request for a new summary.
///
/// Neither topic non-emptiness nor `from <= to` is checked here; the form that
/// builds the config is expected to do that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryConfig {
    pub topics: Vec<String>,
    pub date_range: DateRange,
    pub language: String,
}

impl SummaryConfig {
    /// The value a fresh summary form starts with: no topics, the last seven
    /// days, Spanish.
    pub fn last_week(today: NaiveDate) -> Self {
        Self {
            topics: Vec::new(),
            date_range: DateRange {
                from: today - chrono::Duration::days(7),
                to: today,
            },
            language: crate::catalog::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// The generated text of a summary, before the store stamps an id and date on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText {
    pub title: String,
    pub content: String,
}

impl SummaryText {
    /// The deterministic text used by the simulated summarizer.
    pub fn compose(config: &SummaryConfig) -> Self {
        let topics = config.topics.join(", ");
        let from = config.date_range.from.format("%d/%m/%Y");
        let to = config.date_range.to.format("%d/%m/%Y");
        Self {
            title: format!("Resumen {}", topics),
            content: format!(
                "Resumen generado sobre {} para el período del {} al {}. Este contenido ha sido \
                 personalizado según tus preferencias y filtrado para evitar saturación informativa.",
                topics, from, to
            ),
        }
    }
}

/// The full in-memory content state.
///
/// `history` is newest first. `is_loading` is true only while a summary is
/// being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentState {
    pub history: Vec<Summary>,
    pub active_summary_id: Option<String>,
    pub is_loading: bool,
}

/// The part of [`ContentState`] that is written to durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedContent {
    pub history: Vec<Summary>,
    pub active_summary_id: Option<String>,
}

impl ContentState {
    /// Rebuilds content state from its persisted slice. A generation cannot
    /// survive a restart, so any stale `is_generating` flag is cleared.
    pub fn from_persisted(slice: PersistedContent) -> Self {
        let history = slice
            .history
            .into_iter()
            .map(|mut summary| {
                summary.is_generating = false;
                summary
            })
            .collect();
        Self {
            history,
            active_summary_id: slice.active_summary_id,
            is_loading: false,
        }
    }

    pub fn persisted(&self) -> PersistedContent {
        PersistedContent {
            history: self.history.clone(),
            active_summary_id: self.active_summary_id.clone(),
        }
    }

    pub fn summary(&self, summary_id: &str) -> Option<&Summary> {
        self.history.iter().find(|summary| summary.id == summary_id)
    }

    /// The selected summary, if the active id still points at one.
    pub fn active_summary(&self) -> Option<&Summary> {
        self.active_summary_id
            .as_deref()
            .and_then(|id| self.summary(id))
    }
}
