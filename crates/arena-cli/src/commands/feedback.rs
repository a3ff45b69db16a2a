use anyhow::Context;
use arena_core::enums::FeedbackLabel;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedbackArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FeedbackResponse {
    turn_id: i64,
    label: FeedbackLabel,
    submitted: bool,
}

pub async fn handle(
    args: &FeedbackArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.client
        .submit_label(args.turn_id, args.label)
        .await
        .with_context(|| format!("failed to submit feedback for turn {}", args.turn_id))?;

    output(
        &FeedbackResponse {
            turn_id: args.turn_id,
            label: args.label,
            submitted: true,
        },
        flags.format,
    )
}
