//! Session token claims, issuance and validation.

pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::Claims;
pub use claims::Identity;
pub use errors::JwtError;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use issuer::TokenSettings;
