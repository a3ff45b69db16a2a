//! History retrieval with graceful degradation.

use arena_core::entities::HistoryItem;
use arena_core::enums::FeedbackLabel;
use serde_json::Value;

use crate::legacy::{self, LegacyConversation};
use crate::{ArenaClient, error::ApiError};

const HISTORY_PATH: &str = "/api/history";
const CONVERSATIONS_PATH: &str = "/api/conversations";

impl ArenaClient {
    /// Fetch the history to show for `user_id`.
    ///
    /// Resolution order:
    /// 1. No user id (or an empty one): the configured example history. No
    ///    request is sent.
    /// 2. `GET /api/history?user_id=…`: on success the parsed items are
    ///    returned as-is. An unknown `human_label` reads as unlabeled and an
    ///    entry that cannot be decoded is skipped, both with a warning.
    /// 3. On a non-success status, `GET /api/conversations`: on success its
    ///    records are reshaped by [`legacy::adapt_conversations`]; on a
    ///    non-success status the result is empty.
    ///
    /// Transport and decoding failures are logged and yield an empty list.
    /// This method never fails.
    pub async fn get_history(&self, user_id: Option<&str>) -> Vec<HistoryItem> {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            tracing::debug!("no user id; serving example history");
            return self.example_history.to_vec();
        };

        match self.fetch_history(user_id).await {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(%error, "error fetching history");
                Vec::new()
            }
        }
    }

    async fn fetch_history(&self, user_id: &str) -> Result<Vec<HistoryItem>, ApiError> {
        let url = format!(
            "{}?user_id={}",
            self.endpoint(HISTORY_PATH),
            urlencoding::encode(user_id)
        );
        let resp = self.http.get(&url).send().await?;
        if resp.status().is_success() {
            let raw: Vec<Value> = resp.json().await?;
            return Ok(raw.into_iter().filter_map(decode_item).collect());
        }

        tracing::debug!(
            status = resp.status().as_u16(),
            "history endpoint unavailable; falling back to legacy conversations"
        );
        let fallback = self.http.get(self.endpoint(CONVERSATIONS_PATH)).send().await?;
        if !fallback.status().is_success() {
            tracing::debug!(
                status = fallback.status().as_u16(),
                "legacy conversations unavailable"
            );
            return Ok(Vec::new());
        }

        let records: Vec<LegacyConversation> = fallback.json().await?;
        Ok(legacy::adapt_conversations(records))
    }
}

/// Decode one entry of the `/api/history` array.
///
/// A `human_label` outside the known set is logged and read as unlabeled. An
/// entry that still does not fit [`HistoryItem`] is logged and skipped so the
/// rest of the history survives.
fn decode_item(mut raw: Value) -> Option<HistoryItem> {
    let turn_id = raw.get("turn_id").cloned().unwrap_or(Value::Null);

    if let Some(label) = raw.get_mut("human_label") {
        if !label.is_null() && serde_json::from_value::<FeedbackLabel>(label.clone()).is_err() {
            tracing::warn!(%turn_id, %label, "unknown feedback label; treating turn as unlabeled");
            *label = Value::Null;
        }
    }

    match serde_json::from_value::<HistoryItem>(raw) {
        Ok(item) => {
            if !item.is_consistent() || !item.referee.scores.is_valid() {
                tracing::warn!(turn_id = item.turn_id, "history item breaks referee invariants");
            }
            Some(item)
        }
        Err(error) => {
            tracing::warn!(%turn_id, %error, "skipping malformed history item");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ArenaClient {
        ArenaClient::new(ClientConfig::new(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn user_id_is_url_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/history"))
            .and(query_param("user_id", "a b&c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server).get_history(Some("a b&c")).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn empty_user_id_is_anonymous() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let items = client_for(&server).get_history(Some("")).await;
        assert_eq!(items.len(), 4);
    }

    #[tokio::test]
    async fn malformed_primary_body_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/history"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(client_for(&server).get_history(Some("u1")).await.is_empty());
    }

    fn raw_item(turn_id: i64, label: Value) -> Value {
        serde_json::json!({
            "turn_id": turn_id,
            "question": "q",
            "chosen_agent": "agent_a",
            "enhanced_answer": "a",
            "referee": {
                "scores": {"correctness": 9, "clarity": 9, "usefulness": 9},
                "critique": "c",
                "chosen_agent": "agent_a"
            },
            "created_at": "2025-04-01T10:00:00.000Z",
            "human_label": label
        })
    }

    #[test]
    fn unknown_label_reads_as_unlabeled() {
        let item = decode_item(raw_item(3, serde_json::json!("thumbs_up"))).unwrap();
        assert_eq!(item.turn_id, 3);
        assert!(item.human_label.is_none());

        let item = decode_item(raw_item(4, serde_json::json!("disagree"))).unwrap();
        assert_eq!(item.human_label, Some(FeedbackLabel::Disagree));
    }

    #[test]
    fn entry_missing_required_members_is_skipped() {
        assert!(decode_item(serde_json::json!({"turn_id": 5})).is_none());
        assert!(decode_item(serde_json::json!("not an object")).is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_yields_empty() {
        let client = ArenaClient::new(
            ClientConfig::new("http://127.0.0.1:9").with_timeout(std::time::Duration::from_secs(2)),
        )
        .unwrap();
        assert!(client.get_history(Some("u1")).await.is_empty());
    }
}
