use async_trait::async_trait;

use crate::error::AuthError;
use crate::session::Session;

/// An external identity service the auth context delegates to.
///
/// Implementations never persist anything; the [`AuthContext`](crate::AuthContext)
/// owns storage and state.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in an existing email/password account.
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> Result<Session, AuthError>;

    /// Create an email/password account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Sign in with a Google account. May involve user interaction.
    async fn sign_in_with_google(&self) -> Result<Session, AuthError>;

    /// Mint a fresh ID token for `session`, keeping its user.
    async fn refresh(&self, session: &Session) -> Result<Session, AuthError>;
}
