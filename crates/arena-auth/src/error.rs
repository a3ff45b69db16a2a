use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `arena auth login`")]
    NotAuthenticated,

    #[error("auth is not configured: set {0}")]
    NotConfigured(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("identity provider rejected the request ({code}): {message}")]
    Provider { code: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("browser sign-in failed: {0}")]
    BrowserFlowFailed(String),

    #[error("session store error: {0}")]
    SessionStoreError(String),
}
