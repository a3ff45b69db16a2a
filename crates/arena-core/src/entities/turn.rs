use serde::{Deserialize, Serialize};

use crate::enums::{AgentId, FeedbackLabel};

/// Highest score the referee can award on any axis.
pub const MAX_SCORE: u8 = 10;

/// Referee scores for the winning answer, each on a 0–10 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RefereeScores {
    pub correctness: u8,
    pub clarity: u8,
    pub usefulness: u8,
}

impl RefereeScores {
    /// All axes zero. Used for records that carry no referee data.
    pub const ZERO: Self = Self {
        correctness: 0,
        clarity: 0,
        usefulness: 0,
    };

    /// Whether every axis is within `0..=MAX_SCORE`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.correctness <= MAX_SCORE && self.clarity <= MAX_SCORE && self.usefulness <= MAX_SCORE
    }
}

/// The referee's judgement as stored with a history turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Referee {
    pub scores: RefereeScores,
    pub critique: String,
    pub chosen_agent: AgentId,
    /// Members the backend sends beyond the ones above, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One completed question/answer/judgement cycle.
///
/// Created server-side. The only field a client may change is `human_label`,
/// and only through `POST /api/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryItem {
    /// Unique and stable within one user's history.
    pub turn_id: i64,
    pub question: String,
    pub chosen_agent: AgentId,
    pub enhanced_answer: String,
    pub referee: Referee,
    /// ISO-8601 timestamp, kept as the backend sent it.
    pub created_at: String,
    #[serde(default)]
    pub human_label: Option<FeedbackLabel>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HistoryItem {
    /// Whether the embedded referee verdict names the same agent as the item.
    ///
    /// The backend guarantees this; it is exposed for callers that want to
    /// assert it rather than enforced on deserialization.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.referee.chosen_agent == self.chosen_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(created_at: &str) -> HistoryItem {
        HistoryItem {
            turn_id: 7,
            question: "q".into(),
            chosen_agent: AgentId::AgentA,
            enhanced_answer: String::new(),
            referee: Referee {
                scores: RefereeScores::ZERO,
                critique: String::new(),
                chosen_agent: AgentId::AgentA,
                extra: serde_json::Map::new(),
            },
            created_at: created_at.into(),
            human_label: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn scores_validity() {
        let scores = RefereeScores {
            correctness: 10,
            clarity: 8,
            usefulness: 10,
        };
        assert!(scores.is_valid());

        let out_of_range = RefereeScores {
            clarity: 11,
            ..scores
        };
        assert!(!out_of_range.is_valid());
        assert!(RefereeScores::ZERO.is_valid());
    }

    #[test]
    fn consistency_compares_referee_choice() {
        let mut it = item("");
        assert!(it.is_consistent());
        it.referee.chosen_agent = AgentId::AgentB;
        assert!(!it.is_consistent());
    }

    #[test]
    fn missing_human_label_defaults_to_none() {
        let json = r#"{
            "turn_id": 3,
            "question": "What is Rust?",
            "chosen_agent": "agent_b",
            "enhanced_answer": "A systems language.",
            "referee": {
                "scores": {"correctness": 9, "clarity": 8, "usefulness": 9},
                "critique": "Solid.",
                "chosen_agent": "agent_b"
            },
            "created_at": "2025-01-15T10:30:00Z"
        }"#;
        let parsed: HistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.turn_id, 3);
        assert!(parsed.human_label.is_none());
        assert!(parsed.is_consistent());
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn unknown_members_are_kept() {
        let json = serde_json::json!({
            "turn_id": 4,
            "question": "q",
            "chosen_agent": "agent_a",
            "enhanced_answer": "a",
            "referee": {
                "scores": {"correctness": 1, "clarity": 2, "usefulness": 3},
                "critique": "c",
                "chosen_agent": "agent_a",
                "model": "gemini-flash-latest"
            },
            "created_at": "2025-01-15T10:30:00Z",
            "human_label": "agree",
            "agent_a_answer": "raw a"
        });
        let parsed: HistoryItem = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(parsed.extra.get("agent_a_answer"), Some(&serde_json::json!("raw a")));
        assert_eq!(
            parsed.referee.extra.get("model"),
            Some(&serde_json::json!("gemini-flash-latest"))
        );
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json);
    }
}
