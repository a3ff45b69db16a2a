use anyhow::Context;

use super::SignedInResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let auth = ctx.require_auth()?;

    let user = if args.google {
        if !ctx.config.firebase.supports_google() {
            anyhow::bail!(
                "auth login --google: ARENA_FIREBASE__SIGN_IN_PAGE_URL is not configured"
            );
        }
        auth.sign_in_with_google()
            .await
            .context("Google sign-in failed")?
    } else {
        let (Some(email), Some(password)) = (args.email.as_deref(), args.password.as_deref())
        else {
            anyhow::bail!("auth login: pass --google, or --email and --password");
        };
        auth.sign_in_with_email(email, password)
            .await
            .context("email sign-in failed")?
    };

    output(&SignedInResponse::from_auth(auth, user).await, flags.format)
}
