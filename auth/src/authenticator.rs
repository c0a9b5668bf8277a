use crate::jwt::Claims;
use crate::jwt::Identity;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenSettings;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password hashing and session tokens.
///
/// Services hold one of these behind an `Arc` and use it for every
/// credential and token operation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `settings` - Token signing secret, issuer, audience and lifetime
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(settings),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns false both for a wrong password and for a malformed hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a session token for an identity.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, identity: &Identity) -> Result<IssuedToken, JwtError> {
        self.token_issuer.issue(identity)
    }

    /// Validate and decode a session token.
    ///
    /// # Errors
    /// * `TokenExpired` - Token lifetime has elapsed
    /// * `InvalidToken` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_issuer.validate(token)
    }
}
