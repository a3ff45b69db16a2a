use serde::{Deserialize, Serialize};

use crate::enums::AgentId;

/// Body of `POST /api/ask`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    /// Omitted from the JSON body for anonymous callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl AskRequest {
    #[must_use]
    pub fn new(question: impl Into<String>, user_id: Option<&str>) -> Self {
        Self {
            question: question.into(),
            user_id: user_id.map(str::to_string),
        }
    }
}

/// Response of `POST /api/ask`.
///
/// The backend owns this shape, so the body is kept exactly as received and
/// serializes back unchanged. Accessors read the members the CLI cares about
/// and return `None` when one is missing or has an unexpected type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct AskResponse(serde_json::Value);

impl AskResponse {
    /// The agent the referee picked.
    #[must_use]
    pub fn chosen_agent(&self) -> Option<AgentId> {
        self.0
            .pointer("/referee/chosen_agent")?
            .as_str()?
            .parse()
            .ok()
    }

    /// The enhancer's polished answer text.
    #[must_use]
    pub fn enhanced_answer(&self) -> Option<&str> {
        self.0.pointer("/enhanced_answer/answer")?.as_str()
    }
}
