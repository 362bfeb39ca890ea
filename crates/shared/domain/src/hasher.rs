//! Password hashing service - the boundary to the Argon2 primitive.
//!
//! The directory only needs two capabilities: derive a salted hash and
//! verify a password against one. Both sit behind `CredentialHasher` so the
//! directory can be exercised with a mock in tests.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Version,
};

use crate::error::{DomainError, DomainResult};
use crate::password::{HashParams, Password};

/// Derives and verifies salted password hashes.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plain text password with a fresh random salt.
    fn derive_hash(&self, plain_text: &str) -> DomainResult<Password>;

    /// Check a plain text password against a stored hash.
    ///
    /// A hash that cannot be parsed never verifies.
    fn verify(&self, hash: &Password, plain_text: &str) -> bool;
}

/// Argon2id implementation of [`CredentialHasher`].
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
    params: HashParams,
}

impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("params", &self.params)
            .finish()
    }
}

impl Argon2Hasher {
    /// Build a hasher with the given cost parameters.
    ///
    /// # Errors
    /// Returns a password error if the parameters are out of range.
    pub fn new(params: HashParams) -> DomainResult<Self> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon2()?);
        Ok(Self { argon2, params })
    }

    /// Parameters used for newly derived hashes.
    pub fn params(&self) -> HashParams {
        self.params
    }
}

impl CredentialHasher for Argon2Hasher {
    fn derive_hash(&self, plain_text: &str) -> DomainResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(Password::from_hash(hash.to_string()))
    }

    fn verify(&self, hash: &Password, plain_text: &str) -> bool {
        // Cost parameters come from the parsed hash, not from self.params
        match PasswordHash::new(hash.as_str()) {
            Ok(parsed) => self
                .argon2
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored hash could not be parsed: {}", e);
                false
            }
        }
    }
}
