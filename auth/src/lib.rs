//! Authentication utilities library
//!
//! Provides the credential and session primitives used by the API service:
//! - Password hashing (Argon2id, fixed cost, per-hash salt)
//! - Session token issuance and validation (HS256 with issuer, audience and expiry)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Identity, TokenIssuer, TokenSettings};
//!
//! let settings = TokenSettings::new(
//!     b"secret_key_at_least_32_bytes_long!".to_vec(),
//!     "workflow-api",
//!     "workflow-clients",
//!     60,
//! );
//! let issuer = TokenIssuer::new(&settings);
//! let identity = Identity::new("user123", "alice", "alice@example.com", "User");
//! let issued = issuer.issue(&identity).unwrap();
//! let claims = issuer.validate(&issued.token).unwrap();
//! assert_eq!(claims.identity(), identity);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Identity, TokenSettings};
//!
//! let auth = Authenticator::new(&TokenSettings::new(
//!     b"secret_key_at_least_32_bytes_long!".to_vec(),
//!     "workflow-api",
//!     "workflow-clients",
//!     60,
//! ));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! assert!(auth.verify_password("password123", &hash));
//! let identity = Identity::new("user123", "alice", "alice@example.com", "User");
//! let issued = auth.issue_token(&identity).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&issued.token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
