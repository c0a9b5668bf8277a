use thiserror::Error;

use crate::user::errors::UserError;

/// Hard failures of the authentication flow.
///
/// A failed login (unknown email or wrong password) is not one of these; it
/// is the `LoginOutcome::NoMatch` value.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Email is already registered: {0}")]
    DuplicateEmail(String),

    #[error("Username is already taken: {0}")]
    DuplicateUsername(String),

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Token issuance failed: {0}")]
    Token(#[from] auth::JwtError),

    #[error("User directory error: {0}")]
    Directory(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
            UserError::UsernameAlreadyExists(username) => AuthError::DuplicateUsername(username),
            UserError::PasswordHashing(message) => AuthError::PasswordHashing(message),
            other => AuthError::Directory(other.to_string()),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        AuthError::PasswordHashing(err.to_string())
    }
}
