mod login;
mod logout;
mod signup;
mod status;

use arena_core::identity::AuthUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::{AppContext, ArenaAuth};

/// Handle `arena auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Signup(args) => signup::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags).await,
        AuthCommands::Status => status::handle(ctx, flags).await,
    }
}

/// Printed after a successful login or sign-up.
#[derive(Debug, Serialize)]
struct SignedInResponse {
    authenticated: bool,
    uid: String,
    name: String,
    email: Option<String>,
    expires_at: Option<String>,
}

impl SignedInResponse {
    async fn from_auth(auth: &ArenaAuth, user: AuthUser) -> Self {
        Self {
            authenticated: true,
            name: user.display_label().to_string(),
            uid: user.uid,
            email: user.email,
            expires_at: auth.expires_at().await.map(|at| at.to_rfc3339()),
        }
    }
}
