//! `POST /api/feedback`.

use arena_core::entities::FeedbackRequest;
use arena_core::enums::FeedbackLabel;

use crate::{ArenaClient, error::ApiError, http::check_response};

const FEEDBACK_PATH: &str = "/api/feedback";

impl ArenaClient {
    /// Attach a human label to the turn `turn_id`.
    ///
    /// Not idempotent from the client's point of view: repeated calls are
    /// forwarded each time and the backend decides how to merge them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with the status and body text on a
    /// non-success response, or [`ApiError::Http`] if the request fails.
    pub async fn submit_label(&self, turn_id: i64, label: FeedbackLabel) -> Result<(), ApiError> {
        let body = FeedbackRequest { turn_id, label };
        check_response(
            self.http
                .post(self.endpoint(FEEDBACK_PATH))
                .json(&body)
                .send()
                .await?,
        )
        .await?;

        tracing::debug!(turn_id, %label, "feedback submitted");
        Ok(())
    }
}
