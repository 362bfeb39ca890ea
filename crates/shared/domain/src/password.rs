//! Password value objects - the stored hash and the hashing parameters.
//!
//! A `Password` only ever holds an encoded hash, never plain text. Deriving
//! and verifying hashes is the job of a [`CredentialHasher`](crate::CredentialHasher).

use argon2::Params;

use crate::constants::{
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
};
use crate::error::{DomainError, DomainResult};

/// Encoded password hash (PHC string format).
///
/// The string embeds algorithm, version, parameters, salt and digest, so it
/// can be verified without any outside configuration.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Wrap an existing encoded hash.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// Argon2id cost parameters used when deriving new hashes.
///
/// Verification always uses the parameters embedded in the stored hash,
/// so changing these only affects hashes derived afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashParams {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    /// Convert into `argon2::Params`, rejecting out-of-range values.
    ///
    /// # Errors
    /// Returns a password error if argon2 refuses the combination
    /// (e.g. memory below 8 KiB per lane, zero iterations).
    pub fn to_argon2(&self) -> DomainResult<Params> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| DomainError::password(format!("Invalid hash parameters: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::from_hash("$argon2id$v=19$m=8,t=1,p=1$c2FsdA$ZGlnZXN0");
        let debug = format!("{:?}", password);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("argon2id"));
    }

    #[test]
    fn test_password_into_string() {
        let password = Password::from_hash("stored");
        assert_eq!(password.as_str(), "stored");
        assert_eq!(password.into_string(), "stored");
    }

    #[test]
    fn test_default_params() {
        let params = HashParams::default();
        assert_eq!(params.memory_kib, 65_536);
        assert_eq!(params.iterations, 20);
        assert_eq!(params.parallelism, 1);
        assert!(params.to_argon2().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = HashParams::new(1024, 0, 1).to_argon2();
        assert!(matches!(result, Err(DomainError::Password(_))));
    }

    #[test]
    fn test_memory_below_lane_minimum_rejected() {
        // argon2 requires at least 8 KiB per lane
        let result = HashParams::new(8, 1, 4).to_argon2();
        assert!(result.is_err());
    }
}
