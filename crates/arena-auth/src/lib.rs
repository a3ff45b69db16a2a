//! # arena-auth
//!
//! Firebase-backed authentication for the Arena client.
//!
//! Provides email/password and Google sign-in over the Firebase REST APIs,
//! a browser loopback flow (`tiny_http` + `open`) for the Google credential,
//! OS keychain session storage (`keyring`) with env and file fallbacks, and the
//! [`AuthContext`] that publishes the current user to the rest of the app.

pub mod browser_flow;
pub mod context;
pub mod error;
pub mod firebase;
pub mod provider;
pub mod session;
pub mod session_store;
pub mod validate;

pub use context::{AuthContext, AuthState};
pub use error::AuthError;
pub use firebase::FirebaseProvider;
pub use provider::IdentityProvider;
pub use session::Session;
pub use session_store::{KeyringStore, MemoryStore, SessionStore};
pub use validate::validate_sign_up;
