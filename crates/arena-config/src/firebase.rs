//! Firebase identity provider configuration.

use serde::{Deserialize, Serialize};

fn default_identity_toolkit_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_secure_token_url() -> String {
    "https://securetoken.googleapis.com/v1".to_string()
}

const fn default_login_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirebaseConfig {
    /// Web API key of the Firebase project.
    #[serde(default)]
    pub api_key: String,

    /// Identity Toolkit REST base (`accounts:*` endpoints).
    #[serde(default = "default_identity_toolkit_url")]
    pub identity_toolkit_url: String,

    /// Secure Token REST base (token refresh).
    #[serde(default = "default_secure_token_url")]
    pub secure_token_url: String,

    /// Web page that runs Google sign-in and redirects back to the CLI with
    /// the Google credential.
    #[serde(default)]
    pub sign_in_page_url: String,

    /// How long the browser sign-in waits for its callback.
    #[serde(default = "default_login_timeout_secs")]
    pub login_timeout_secs: u64,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_toolkit_url: default_identity_toolkit_url(),
            secure_token_url: default_secure_token_url(),
            sign_in_page_url: String::new(),
            login_timeout_secs: default_login_timeout_secs(),
        }
    }
}

impl FirebaseConfig {
    /// Check if email/password sign-in can be attempted.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Check if Google sign-in can be attempted.
    pub fn supports_google(&self) -> bool {
        self.is_configured() && !self.sign_in_page_url.is_empty()
    }
}
