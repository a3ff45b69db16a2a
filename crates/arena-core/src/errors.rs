//! Cross-cutting error types for Arena.
//!
//! Transport and provider errors (`ApiError`, `AuthError`, `ConfigError`) live
//! in their own crates. They converge into `anyhow` in `arena-cli`.

use thiserror::Error;

/// Errors that can be raised by any Arena crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known variant of an enum.
    #[error("Unknown {kind}: '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
