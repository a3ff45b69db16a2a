use std::time::Duration;

use anyhow::Context;
use arena_auth::{AuthContext, FirebaseProvider, KeyringStore};
use arena_client::{ArenaClient, ClientConfig};
use arena_config::ArenaConfig;
use arena_core::identity::AuthUser;

/// Auth context as the CLI wires it: Firebase over REST, keyring storage.
pub type ArenaAuth = AuthContext<FirebaseProvider, KeyringStore>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ArenaConfig,
    pub client: ArenaClient,
    /// `None` when Firebase is not configured; every command then runs
    /// anonymously.
    pub auth: Option<ArenaAuth>,
}

impl AppContext {
    pub fn init(config: ArenaConfig) -> anyhow::Result<Self> {
        let client = ArenaClient::new(client_config(&config))
            .context("failed to build the backend HTTP client")?;

        let auth = if config.firebase.is_configured() {
            let provider = FirebaseProvider::from_config(&config.firebase)
                .context("failed to initialize Firebase auth")?;
            let store = KeyringStore::new().context("failed to locate session storage")?;
            Some(AuthContext::new(provider, store))
        } else {
            None
        };

        Ok(Self {
            config,
            client,
            auth,
        })
    }

    /// The auth context, or an error naming the missing configuration.
    pub fn require_auth(&self) -> anyhow::Result<&ArenaAuth> {
        self.auth.as_ref().ok_or_else(|| {
            anyhow::anyhow!("auth is not configured: set ARENA_FIREBASE__API_KEY")
        })
    }

    /// Restore the stored session and return its user, if any.
    pub async fn current_user(&self) -> Option<AuthUser> {
        match &self.auth {
            Some(auth) => auth.restore().await,
            None => None,
        }
    }
}

fn client_config(config: &ArenaConfig) -> ClientConfig {
    let mut client = ClientConfig::new(config.api.base_url.clone())
        .with_user_agent(config.api.user_agent.clone());
    if let Some(secs) = config.api.timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs));
    }
    client
}
