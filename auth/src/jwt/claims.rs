use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The user facts a session token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn new(
        user_id: impl ToString,
        username: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            username: username.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Session token claims.
///
/// Standard RFC 7519 claims plus the identity fields carried by every
/// session token. Once encoded the claims never change; a token is valid
/// only by its signature, issuer, audience and expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    pub username: String,

    pub email: String,

    pub role: String,

    /// JWT ID, random per issuance
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Create claims for an identity.
    ///
    /// # Arguments
    /// * `identity` - User the token is issued for
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Time until the token expires
    ///
    /// # Returns
    /// Claims with a fresh `jti`; issuer and audience left empty
    pub fn for_identity(identity: &Identity, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let expiration = issued_at + lifetime;

        Self {
            sub: identity.user_id.clone(),
            username: identity.username.clone(),
            email: identity.email.clone(),
            role: identity.role.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            iss: String::new(),
            aud: String::new(),
        }
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = iss.into();
        self
    }

    /// Set audience.
    pub fn with_audience(mut self, aud: impl Into<String>) -> Self {
        self.aud = aud.into();
        self
    }

    /// Identity carried by these claims.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.sub.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}
