//! Agent identifiers and feedback labels.
//!
//! Both enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so they match the backend's JSON exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AgentId
// ---------------------------------------------------------------------------

/// One of the two competing agents in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentId {
    AgentA,
    AgentB,
}

impl AgentId {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgentA => "agent_a",
            Self::AgentB => "agent_b",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent_a" => Ok(Self::AgentA),
            "agent_b" => Ok(Self::AgentB),
            other => Err(CoreError::UnknownVariant {
                kind: "agent",
                value: other.to_string(),
                expected: "agent_a, agent_b",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// FeedbackLabel
// ---------------------------------------------------------------------------

/// A user's verdict on the referee's choice for a past turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLabel {
    /// The user agrees with the agent the referee picked.
    Agree,
    /// The user would have picked the other agent.
    Disagree,
}

impl FeedbackLabel {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::Disagree => "disagree",
        }
    }
}

impl fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agree" => Ok(Self::Agree),
            "disagree" => Ok(Self::Disagree),
            _ => Err(CoreError::UnknownVariant {
                kind: "feedback label",
                value: s.to_string(),
                expected: "agree, disagree",
            }),
        }
    }
}
