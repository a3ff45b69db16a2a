use serde::{Deserialize, Serialize};

use crate::enums::FeedbackLabel;

/// Body of `POST /api/feedback`, attaching a human label to a past turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub turn_id: i64,
    pub label: FeedbackLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_turn_and_label() {
        let body = serde_json::to_value(FeedbackRequest {
            turn_id: 42,
            label: FeedbackLabel::Agree,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"turn_id": 42, "label": "agree"}));
    }
}
