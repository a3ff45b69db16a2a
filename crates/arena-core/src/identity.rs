use serde::{Deserialize, Serialize};

/// Lightweight signed-in user identity for cross-crate passing.
///
/// Produced by `arena-auth`, consumed by `arena-cli`. `uid` is the value sent
/// to the backend as `user_id`. Contains only data fields, no auth logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    /// Identity provider user ID (Firebase `localId`).
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl AuthUser {
    /// Name to show for this user: display name, else the local part of the
    /// email address, else the uid.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name;
        }
        if let Some(local) = self
            .email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|l| !l.is_empty())
        {
            return local;
        }
        &self.uid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            uid: "uid_123".into(),
            email: Some("ada@example.com".into()),
            display_name: None,
            photo_url: None,
        }
    }

    #[test]
    fn display_label_prefers_display_name() {
        let mut u = user();
        u.display_name = Some("Ada Lovelace".into());
        assert_eq!(u.display_label(), "Ada Lovelace");
    }

    #[test]
    fn display_label_falls_back_to_email_local_part() {
        assert_eq!(user().display_label(), "ada");
    }

    #[test]
    fn display_label_falls_back_to_uid() {
        let mut u = user();
        u.email = None;
        assert_eq!(u.display_label(), "uid_123");
    }
}
