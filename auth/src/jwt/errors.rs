use thiserror::Error;

/// Error type for JWT operations.
///
/// `TokenExpired` is kept apart from `InvalidToken` so callers can tell
/// "log in again" from "this token was never good".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

impl JwtError {
    pub fn is_expired(&self) -> bool {
        matches!(self, JwtError::TokenExpired)
    }
}
