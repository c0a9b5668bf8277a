use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Identity;
use super::errors::JwtError;

/// Settings for issuing and validating session tokens.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: Vec<u8>,
    pub issuer: String,
    pub audience: String,
    pub lifetime: Duration,
}

impl TokenSettings {
    pub fn new(
        secret: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        lifetime_minutes: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            lifetime: Duration::minutes(lifetime_minutes),
        }
    }
}

/// A signed session token and the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Session token issuer.
///
/// Signs claims with HS256 (HMAC with SHA-256) under a symmetric secret and
/// validates tokens against the same secret, issuer and audience. Expiry is
/// checked with zero leeway.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `settings` - Secret, issuer, audience and token lifetime
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            decoding_key: DecodingKey::from_secret(&settings.secret),
            algorithm: Algorithm::HS256,
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            lifetime: settings.lifetime,
        }
    }

    /// Issue a token for an identity, valid from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, JwtError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token for an identity as if issued at `issued_at`.
    ///
    /// # Arguments
    /// * `identity` - User the token is for
    /// * `issued_at` - Issuance instant; expiry is `issued_at + lifetime`
    ///
    /// # Returns
    /// Signed compact token and its expiry
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_identity(identity, issued_at, self.lifetime)
            .with_issuer(self.issuer.clone())
            .with_audience(self.audience.clone());

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: issued_at + self.lifetime,
        })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Signature is good but `exp` has passed
    /// * `InvalidToken` - Bad signature, issuer, audience, or malformed token
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}
