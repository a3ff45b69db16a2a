use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user_id = if args.anonymous {
        None
    } else if let Some(explicit) = &args.user_id {
        Some(explicit.clone())
    } else {
        ctx.current_user().await.map(|u| u.uid)
    };

    if user_id.is_none() {
        tracing::debug!("no user id; showing example history");
    }

    let items = ctx.client.get_history(user_id.as_deref()).await;
    output(&items, flags.format)
}
