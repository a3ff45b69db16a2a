use anyhow::Context;

use super::SignedInResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    arena_auth::validate_sign_up(&args.email, &args.password, &args.confirm_password)?;

    let auth = ctx.require_auth()?;
    let user = auth
        .sign_up_with_email(&args.email, &args.password)
        .await
        .context("sign-up failed")?;

    output(&SignedInResponse::from_auth(auth, user).await, flags.format)
}
