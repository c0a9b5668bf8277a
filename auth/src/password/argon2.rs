use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with a fixed work factor. Every hash carries its own random salt
/// and the parameters it was produced with, so verification never needs
/// external state.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
}

impl PasswordHasher {
    /// Memory cost in KiB.
    pub const MEMORY_KIB: u32 = 19 * 1024;
    /// Number of passes over memory.
    pub const ITERATIONS: u32 = 2;
    /// Degree of parallelism.
    pub const PARALLELISM: u32 = 1;

    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with the fixed cost parameters
    pub fn new() -> Self {
        Self {
            memory_kib: Self::MEMORY_KIB,
            iterations: Self::ITERATIONS,
            parallelism: Self::PARALLELISM,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh salt is generated on every call, so hashing the same password
    /// twice yields two different digests.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Parameters and salt are read from `hash` itself. A malformed hash is
    /// reported the same way as a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
