//! Client error types.

use thiserror::Error;

/// Errors surfaced by the strict client operations (`ask_question`,
/// `submit_label`). `get_history` never returns one.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// The request was rejected before it was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            Self::InvalidInput(_) => None,
        }
    }
}
