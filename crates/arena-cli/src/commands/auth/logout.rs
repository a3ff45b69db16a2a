use arena_auth::{KeyringStore, SessionStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &ctx.auth {
        Some(auth) => auth.logout().await?,
        // A session may survive from a run that had Firebase configured.
        None => KeyringStore::new()?.clear()?,
    }
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
