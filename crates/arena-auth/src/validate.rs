//! Local checks run before contacting the identity provider.

use crate::error::AuthError;

/// Shortest password the provider accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reject obviously malformed email addresses.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] when `email` has no `@` or an empty
/// local or domain part.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AuthError::InvalidInput(format!(
            "'{email}' is not a valid email address"
        ))),
    }
}

/// Check a sign-up form: valid email, matching passwords, minimum length.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] with the first problem found.
pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
    validate_email(email)?;
    if password != confirm {
        return Err(AuthError::InvalidInput("Passwords do not match".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
