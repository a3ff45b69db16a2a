use arena_core::enums::FeedbackLabel;
use clap::{Args, Subcommand};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask both agents a question and print the referee's verdict.
    Ask(AskArgs),
    /// Show past turns for the signed-in user (or the example set).
    History(HistoryArgs),
    /// Agree or disagree with the referee's choice on a past turn.
    Feedback(FeedbackArgs),
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

/// Arguments for `arena ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// The question to ask.
    pub question: String,
    /// Do not attach the signed-in user's id.
    #[arg(long)]
    pub anonymous: bool,
}

/// Arguments for `arena history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Fetch history for this user id instead of the signed-in user.
    #[arg(long, conflicts_with = "anonymous")]
    pub user_id: Option<String>,
    /// Show the example history without contacting the backend.
    #[arg(long)]
    pub anonymous: bool,
}

/// Arguments for `arena feedback`.
#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// Turn id from `arena history`.
    pub turn_id: i64,
    /// `agree` or `disagree`.
    pub label: FeedbackLabel,
}
