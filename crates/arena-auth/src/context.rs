use arena_core::identity::AuthUser;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};

use crate::error::AuthError;
use crate::provider::IdentityProvider;
use crate::session::Session;
use crate::session_store::SessionStore;
use crate::validate::{validate_email, validate_sign_up};

/// Refresh a restored session when it expires within this many seconds.
pub const REFRESH_BUFFER_SECS: i64 = 300;

/// Observable auth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// `true` until the first [`AuthContext::restore`] completes and while a
    /// sign-in is in flight.
    pub loading: bool,
}

/// Holds the current user for the rest of the application.
///
/// Consumers read [`user`](Self::user) or [`subscribe`](Self::subscribe) to
/// changes; tokens stay inside the context and its store.
pub struct AuthContext<P, S> {
    provider: P,
    store: S,
    state: watch::Sender<AuthState>,
    session: Mutex<Option<Session>>,
}

impl<P: IdentityProvider, S: SessionStore> AuthContext<P, S> {
    /// New context in the loading state with no user.
    pub fn new(provider: P, store: S) -> Self {
        let (state, _) = watch::channel(AuthState {
            user: None,
            loading: true,
        });
        Self {
            provider,
            store,
            state,
            session: Mutex::new(None),
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<AuthUser> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// The store sessions are persisted in.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Expiry of the current session's ID token.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.session.lock().await.as_ref().map(|s| s.expires_at)
    }

    /// Load the stored session and publish its user.
    ///
    /// A session within [`REFRESH_BUFFER_SECS`] of expiry is refreshed first.
    /// When the refresh fails the stored session is discarded and the context
    /// ends up signed out. Always clears `loading`.
    pub async fn restore(&self) -> Option<AuthUser> {
        let mut restored = self.store.load();

        if let Some(session) = restored.take() {
            if session.is_near_expiry(REFRESH_BUFFER_SECS) {
                match self.provider.refresh(&session).await {
                    Ok(fresh) => {
                        if let Err(error) = self.store.save(&fresh) {
                            tracing::warn!(%error, "failed to persist refreshed session");
                        }
                        restored = Some(fresh);
                    }
                    Err(error) => {
                        tracing::warn!(%error, uid = %session.user.uid, "session refresh failed; signing out");
                        if let Err(error) = self.store.clear() {
                            tracing::warn!(%error, "failed to clear stale session");
                        }
                    }
                }
            } else {
                restored = Some(session);
            }
        }

        let user = restored.as_ref().map(|s| s.user.clone());
        *self.session.lock().await = restored;
        self.state.send_modify(|state| {
            state.user.clone_from(&user);
            state.loading = false;
        });
        user
    }

    /// Sign in with Google.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`]; state is left signed out.
    pub async fn sign_in_with_google(&self) -> Result<AuthUser, AuthError> {
        self.complete(self.provider.sign_in_with_google()).await
    }

    /// Sign in with an existing email/password account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidInput`] for a malformed email, otherwise the
    /// provider's error.
    pub async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        validate_email(email)?;
        self.complete(self.provider.sign_in_with_password(email.trim(), password))
            .await
    }

    /// Create an email/password account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidInput`] for a malformed email or a short
    /// password, otherwise the provider's error.
    pub async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        validate_sign_up(email, password, password)?;
        self.complete(self.provider.sign_up(email.trim(), password))
            .await
    }

    /// Forget the session locally and in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStoreError`] if the stored session cannot be
    /// removed. The in-memory state is signed out regardless.
    pub async fn logout(&self) -> Result<(), AuthError> {
        *self.session.lock().await = None;
        self.state.send_modify(|state| {
            state.user = None;
            state.loading = false;
        });
        self.store.clear()
    }

    /// Run a sign-in attempt with `loading` raised, then publish its outcome.
    async fn complete(
        &self,
        attempt: impl Future<Output = Result<Session, AuthError>>,
    ) -> Result<AuthUser, AuthError> {
        self.state.send_modify(|state| state.loading = true);
        let outcome = attempt.await;

        let session = match outcome {
            Ok(session) => session,
            Err(error) => {
                self.state.send_modify(|state| state.loading = false);
                return Err(error);
            }
        };

        if let Err(error) = self.store.save(&session) {
            tracing::warn!(%error, "signed in but the session could not be persisted");
        }

        let user = session.user.clone();
        tracing::info!(uid = %user.uid, "signed in");
        *self.session.lock().await = Some(session);
        self.state.send_modify(|state| {
            state.user = Some(user.clone());
            state.loading = false;
        });
        Ok(user)
    }
}
