//! Shared HTTP response helpers for the strict endpoints.
//!
//! Centralizes the non-success → [`ApiError::Api`] conversion so the
//! endpoint modules stay focused on request construction.

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on 2xx. Otherwise reads the body text and
/// returns [`ApiError::Api`] carrying the status code and that text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
