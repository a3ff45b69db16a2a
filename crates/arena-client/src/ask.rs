//! `POST /api/ask`.

use arena_core::entities::{AskRequest, AskResponse};

use crate::{ArenaClient, error::ApiError, http::check_response};

const ASK_PATH: &str = "/api/ask";

impl ArenaClient {
    /// Send `question` to the orchestration backend and return its verdict.
    ///
    /// One request, no retry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for a blank question (nothing is
    /// sent), [`ApiError::Api`] with the status and body text on a
    /// non-success response, or [`ApiError::Http`] if the request fails or the
    /// body cannot be parsed.
    pub async fn ask_question(
        &self,
        question: &str,
        user_id: Option<&str>,
    ) -> Result<AskResponse, ApiError> {
        if question.trim().is_empty() {
            return Err(ApiError::InvalidInput("question must not be empty".into()));
        }

        let body = AskRequest::new(question, user_id);
        tracing::debug!(anonymous = user_id.is_none(), "asking question");
        let resp = check_response(
            self.http
                .post(self.endpoint(ASK_PATH))
                .json(&body)
                .send()
                .await?,
        )
        .await?;

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn blank_question_is_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ArenaClient::new(ClientConfig::new(server.uri())).unwrap();
        let err = client.ask_question("   ", None).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn anonymous_body_has_no_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .and(body_json(serde_json::json!({"question": "What is 2+2?"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ArenaClient::new(ClientConfig::new(server.uri())).unwrap();
        client.ask_question("What is 2+2?", None).await.unwrap();
    }
}
