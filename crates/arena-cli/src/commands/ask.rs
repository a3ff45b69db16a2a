use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = if args.anonymous {
        None
    } else {
        ctx.current_user().await
    };
    let user_id = user.as_ref().map(|u| u.uid.as_str());

    let response = ctx
        .client
        .ask_question(&args.question, user_id)
        .await
        .context("ask failed")?;
    tracing::debug!(
        chosen_agent = ?response.chosen_agent(),
        enhanced = response.enhanced_answer().is_some(),
        "referee verdict received"
    );
    output(&response, flags.format)
}
