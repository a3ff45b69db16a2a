//! Firebase Authentication over its public REST APIs.
//!
//! Email/password and Google credential exchange go through the Identity
//! Toolkit (`accounts:*`), token refresh through the Secure Token service.

use std::time::Duration;

use arena_config::FirebaseConfig;
use arena_core::identity::AuthUser;
use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::browser_flow;
use crate::error::AuthError;
use crate::provider::IdentityProvider;
use crate::session::Session;

const USER_AGENT: &str = concat!("arena-auth/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// [`IdentityProvider`] backed by a Firebase project.
#[derive(Debug, Clone)]
pub struct FirebaseProvider {
    http: reqwest::Client,
    api_key: String,
    identity_toolkit_url: String,
    secure_token_url: String,
    sign_in_page_url: Option<String>,
    login_timeout: Duration,
}

impl FirebaseProvider {
    /// Build a provider from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotConfigured` if no API key is set, or
    /// `AuthError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &FirebaseConfig) -> Result<Self, AuthError> {
        if !config.is_configured() {
            return Err(AuthError::NotConfigured("firebase.api_key".into()));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            identity_toolkit_url: config.identity_toolkit_url.trim_end_matches('/').to_string(),
            secure_token_url: config.secure_token_url.trim_end_matches('/').to_string(),
            sign_in_page_url: Some(config.sign_in_page_url.clone()).filter(|u| !u.is_empty()),
            login_timeout: Duration::from_secs(config.login_timeout_secs),
        })
    }

    /// Exchange a Google ID token for a Firebase session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Provider` if Firebase rejects the credential.
    pub async fn exchange_google_credential(
        &self,
        google_id_token: &str,
    ) -> Result<Session, AuthError> {
        let post_body = format!(
            "id_token={}&providerId=google.com",
            urlencoding::encode(google_id_token)
        );
        let body = serde_json::json!({
            "postBody": post_body,
            "requestUri": "http://localhost",
            "returnSecureToken": true,
            "returnIdpCredential": true,
        });
        let resp: AccountResponse = self.post_json(&self.accounts_url("signInWithIdp"), &body).await?;
        Ok(resp.into_session())
    }

    fn accounts_url(&self, action: &str) -> String {
        format!(
            "{}/accounts:{action}?key={}",
            self.identity_toolkit_url,
            urlencoding::encode(&self.api_key)
        )
    }

    async fn password_request(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let resp: AccountResponse = self.post_json(&self.accounts_url(action), &body).await?;
        Ok(resp.into_session())
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, AuthError> {
        let resp = self.http.post(url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(provider_error(status.as_u16(), &text));
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        tracing::debug!(email, "firebase: signInWithPassword");
        self.password_request("signInWithPassword", email, password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tracing::debug!(email, "firebase: signUp");
        self.password_request("signUp", email, password).await
    }

    async fn sign_in_with_google(&self) -> Result<Session, AuthError> {
        let page = self
            .sign_in_page_url
            .as_deref()
            .ok_or_else(|| AuthError::NotConfigured("firebase.sign_in_page_url".into()))?;
        let credential = browser_flow::obtain_google_credential(page, self.login_timeout).await?;
        tracing::debug!("firebase: signInWithIdp (google.com)");
        self.exchange_google_credential(&credential).await
    }

    async fn refresh(&self, session: &Session) -> Result<Session, AuthError> {
        let url = format!(
            "{}/token?key={}",
            self.secure_token_url,
            urlencoding::encode(&self.api_key)
        );
        let body = serde_json::json!({
            "grant_type": "refresh_token",
            "refresh_token": session.refresh_token,
        });
        let resp: RefreshResponse = self.post_json(&url, &body).await?;
        tracing::debug!(uid = %session.user.uid, "firebase: token refreshed");
        Ok(Session {
            user: session.user.clone(),
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
            expires_at: expires_at(&resp.expires_in),
        })
    }
}

// --- Wire types ---

/// Body of a successful `accounts:*` call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: String,
}

impl AccountResponse {
    fn into_session(self) -> Session {
        Session {
            user: AuthUser {
                uid: self.local_id,
                email: self.email.filter(|e| !e.is_empty()),
                display_name: self.display_name.filter(|n| !n.is_empty()),
                photo_url: self.photo_url.filter(|p| !p.is_empty()),
            },
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at: expires_at(&self.expires_in),
        }
    }
}

/// Body of a successful Secure Token refresh.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// `expires_in` arrives as a decimal string of seconds. Values chrono cannot
/// represent fall back to the default lifetime.
fn expires_at(expires_in: &str) -> chrono::DateTime<Utc> {
    let now = Utc::now();
    let lifetime = expires_in
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| now.checked_add_signed(delta));
    lifetime.unwrap_or(now + TimeDelta::seconds(DEFAULT_TOKEN_LIFETIME_SECS))
}

/// Map a Firebase error body (`{"error":{"message":"CODE : detail"}}`) to
/// [`AuthError::Provider`] with a readable message.
fn provider_error(status: u16, body: &str) -> AuthError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return AuthError::Provider {
            code: format!("HTTP_{status}"),
            message: if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body.trim().to_string()
            },
        };
    };

    let (code, detail) = match envelope.error.message.split_once(':') {
        Some((code, detail)) => (code.trim().to_string(), Some(detail.trim().to_string())),
        None => (envelope.error.message.trim().to_string(), None),
    };

    let message = match code.as_str() {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "invalid email or password".to_string()
        }
        "EMAIL_EXISTS" => "an account with this email already exists".to_string(),
        "WEAK_PASSWORD" => "password is too weak".to_string(),
        "INVALID_EMAIL" => "email address is badly formatted".to_string(),
        "USER_DISABLED" => "this account has been disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "too many attempts; try again later".to_string(),
        "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
            "session expired; sign in again".to_string()
        }
        _ => detail.unwrap_or_else(|| code.to_lowercase().replace('_', " ")),
    };

    AuthError::Provider { code, message }
}
