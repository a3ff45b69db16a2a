//! Adapter for the legacy `GET /api/conversations` listing.
//!
//! Older backends only expose a conversation list without referee data. Each
//! record is reshaped into a [`HistoryItem`] with placeholder judgement
//! fields so callers can treat both sources the same way.

use arena_core::entities::{HistoryItem, Referee, RefereeScores};
use arena_core::enums::AgentId;
use serde::Deserialize;

/// Critique shown for turns reconstructed from legacy records.
pub const PLACEHOLDER_CRITIQUE: &str = "History details unavailable in this build.";

/// Question shown when a legacy record has no title.
pub const UNTITLED_QUESTION: &str = "Conversation";

/// One entry of the legacy conversation listing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LegacyConversation {
    /// Any JSON value; only a non-empty string is used as the question.
    #[serde(default)]
    pub title: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl LegacyConversation {
    /// Reshape into a history item whose `turn_id` is `index`.
    #[must_use]
    pub fn into_history_item(self, index: usize) -> HistoryItem {
        HistoryItem {
            turn_id: i64::try_from(index).unwrap_or(i64::MAX),
            question: self
                .title
                .as_str()
                .filter(|t| !t.is_empty())
                .unwrap_or(UNTITLED_QUESTION)
                .to_string(),
            chosen_agent: AgentId::AgentA,
            enhanced_answer: String::new(),
            referee: Referee {
                scores: RefereeScores::ZERO,
                critique: PLACEHOLDER_CRITIQUE.to_string(),
                chosen_agent: AgentId::AgentA,
                extra: serde_json::Map::new(),
            },
            created_at: self.created_at.unwrap_or_default(),
            human_label: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Reshape a legacy listing; each record's position becomes its `turn_id`.
#[must_use]
pub fn adapt_conversations(records: Vec<LegacyConversation>) -> Vec<HistoryItem> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_history_item(index))
        .collect()
}
