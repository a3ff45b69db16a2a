//! # arena-client
//!
//! HTTP client for the Arena orchestration backend.
//!
//! Translates three intents into HTTP calls:
//! - ask a question (`POST /api/ask`)
//! - fetch a user's history (`GET /api/history`, falling back to the legacy
//!   `GET /api/conversations`, or to a fixed example set for anonymous callers)
//! - label a past turn (`POST /api/feedback`)
//!
//! Asking and labelling are strict: any non-success status becomes an
//! [`ApiError`]. History is lenient: every failure degrades to another source
//! or an empty list.

pub mod ask;
pub mod feedback;
pub mod history;
pub mod legacy;

mod error;
mod http;

pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use arena_core::entities::HistoryItem;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8002";

const DEFAULT_USER_AGENT: &str = "arena-client/0.1";

// ── Config ─────────────────────────────────────────────────────────

/// Everything an [`ArenaClient`] needs, passed in at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://localhost:8002`.
    pub base_url: String,
    /// History returned to callers without a user id.
    pub example_history: Vec<HistoryItem>,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Config for `base_url` with the built-in example history.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            example_history: arena_core::demo::example_history(chrono::Utc::now()),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    #[must_use]
    pub fn with_example_history(mut self, items: Vec<HistoryItem>) -> Self {
        self.example_history = items;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the orchestration backend.
///
/// Cheap to clone; clones share the connection pool and the example history.
#[derive(Debug, Clone)]
pub struct ArenaClient {
    http: reqwest::Client,
    base_url: String,
    example_history: Arc<[HistoryItem]>,
}

impl ArenaClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            example_history: config.example_history.into(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
