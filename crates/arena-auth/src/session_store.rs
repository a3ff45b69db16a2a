use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;
use crate::session::Session;

const DEFAULT_KEYRING_SERVICE: &str = "arena-cli";
const KEYRING_USER: &str = "firebase-session";
const SESSION_FILE_NAME: &str = "session.json";
const SESSION_ENV_VAR: &str = "ARENA_AUTH__SESSION";

/// Persistence for the signed-in session.
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any. Unreadable entries count as absent.
    fn load(&self) -> Option<Session>;

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStoreError`] if no backend accepted it.
    fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// Remove the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStoreError`] if it exists but cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;
}

// ---------------------------------------------------------------------------
// Keyring + file
// ---------------------------------------------------------------------------

/// OS keychain storage with a `0600` file fallback.
///
/// Load priority: keyring → `ARENA_AUTH__SESSION` env (session JSON) → file
/// (`~/.arena/session.json`).
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
    file_path: PathBuf,
}

impl KeyringStore {
    /// Store under the user's home directory.
    ///
    /// The keyring service defaults to `"arena-cli"`; override it via
    /// `ARENA_KEYRING_SERVICE` (e.g. `"arena-cli-test"`) to avoid touching real
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStoreError`] if the home directory cannot be
    /// resolved.
    pub fn new() -> Result<Self, AuthError> {
        let file_path = dirs::home_dir()
            .map(|h| h.join(".arena").join(SESSION_FILE_NAME))
            .ok_or_else(|| {
                AuthError::SessionStoreError(
                    "home directory not found; cannot store the session".into(),
                )
            })?;
        let service = std::env::var("ARENA_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self::with_paths(service, file_path))
    }

    /// Store with an explicit keyring service name and fallback file.
    #[must_use]
    pub fn with_paths(service: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            file_path: file_path.into(),
        }
    }

    /// Which tier the current session came from (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<&'static str> {
        if self.load_keyring().is_some() {
            return Some("keyring");
        }
        if load_env().is_some() {
            return Some("env");
        }
        if load_file(&self.file_path).is_some() {
            return Some("file");
        }
        None
    }

    fn entry(&self) -> Result<keyring::Entry, keyring::Error> {
        keyring::Entry::new(&self.service, KEYRING_USER)
    }

    fn load_keyring(&self) -> Option<Session> {
        let json = self.entry().ok()?.get_password().ok()?;
        parse_session(&json)
    }
}

impl SessionStore for KeyringStore {
    fn load(&self) -> Option<Session> {
        self.load_keyring()
            .or_else(load_env)
            .or_else(|| load_file(&self.file_path))
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;

        match self.entry() {
            Ok(entry) => match entry.set_password(&json) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    store_file(&self.file_path, &json)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                store_file(&self.file_path, &json)
            }
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        // Keyring entry may not exist.
        if let Ok(entry) = self.entry() {
            let _ = entry.delete_credential();
        }

        if self.file_path.exists() {
            fs::remove_file(&self.file_path).map_err(|e| {
                AuthError::SessionStoreError(format!(
                    "failed to delete {}: {e}",
                    self.file_path.display()
                ))
            })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Option<Session>>,
}

impl MemoryStore {
    /// Store pre-seeded with `session`.
    #[must_use]
    pub const fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| AuthError::SessionStoreError(format!("lock poisoned: {e}")))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| AuthError::SessionStoreError(format!("lock poisoned: {e}")))?;
        *guard = None;
        Ok(())
    }
}

// --- Private helpers ---

fn parse_session(json: &str) -> Option<Session> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(json) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable stored session");
            None
        }
    }
}

fn load_env() -> Option<Session> {
    std::env::var(SESSION_ENV_VAR)
        .ok()
        .and_then(|json| parse_session(&json))
}

fn store_file(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::SessionStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::SessionStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::SessionStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file(path: &Path) -> Option<Session> {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| parse_session(&json))
}
