use arena_core::identity::AuthUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in identity plus the tokens that keep it alive.
///
/// Produced by an [`IdentityProvider`](crate::IdentityProvider), persisted by a
/// [`SessionStore`](crate::session_store::SessionStore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: AuthUser,
    /// Short-lived provider ID token.
    pub id_token: String,
    /// Long-lived token used to mint a new `id_token`.
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check if the ID token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_session(expires_at: DateTime<Utc>) -> Session {
        Session {
            user: AuthUser {
                uid: "uid_test123".into(),
                email: Some("test@example.com".into()),
                display_name: None,
                photo_url: None,
            },
            id_token: "id.token.value".into(),
            refresh_token: "refresh-value".into(),
            expires_at,
        }
    }

    #[test]
    fn is_near_expiry_false_when_far_future() {
        let session = make_session(Utc::now() + chrono::TimeDelta::hours(1));
        assert!(!session.is_near_expiry(300));
    }

    #[test]
    fn is_near_expiry_true_within_buffer() {
        let session = make_session(Utc::now() + chrono::TimeDelta::seconds(120));
        assert!(session.is_near_expiry(300));
    }

    #[test]
    fn is_near_expiry_true_when_past() {
        let session = make_session(Utc::now() - chrono::TimeDelta::seconds(10));
        assert!(session.is_near_expiry(0));
    }

    #[test]
    fn session_json_roundtrip() {
        let session = make_session(Utc::now());
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
