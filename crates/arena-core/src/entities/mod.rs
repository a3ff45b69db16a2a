//! Wire entities exchanged with the orchestration backend.

mod ask;
mod feedback;
mod turn;

pub use ask::{AskRequest, AskResponse};
pub use feedback::FeedbackRequest;
pub use turn::{HistoryItem, MAX_SCORE, Referee, RefereeScores};
