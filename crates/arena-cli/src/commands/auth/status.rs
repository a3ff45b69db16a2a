use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    uid: Option<String>,
    name: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    session_source: Option<String>,
    note: Option<String>,
}

impl AuthStatusResponse {
    fn signed_out(note: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            uid: None,
            name: None,
            email: None,
            expires_at: None,
            session_source: None,
            note: Some(note.into()),
        }
    }
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match &ctx.auth {
        None => AuthStatusResponse::signed_out(
            "ARENA_FIREBASE__API_KEY not configured; requests are anonymous",
        ),
        Some(auth) => match auth.restore().await {
            Some(user) => AuthStatusResponse {
                authenticated: true,
                name: Some(user.display_label().to_string()),
                uid: Some(user.uid),
                email: user.email,
                expires_at: auth.expires_at().await.map(|at| at.to_rfc3339()),
                session_source: auth.store().detect_source().map(str::to_string),
                note: None,
            },
            None => AuthStatusResponse::signed_out("no stored session; requests are anonymous"),
        },
    };

    output(&status, flags.format)
}
