//! Credential service configuration.

use common::{AppError, AppResult, HasherConfig, ServiceConfig};
use domain::{Argon2Hasher, HashParams};

/// Credential service configuration.
#[derive(Debug, Clone, Default)]
pub struct CredentialServiceConfig {
    /// Service name and default log level
    pub service: ServiceConfig,
    /// Argon2id costs for newly derived hashes
    pub hasher: HasherConfig,
}

impl CredentialServiceConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            service: ServiceConfig::default(),
            hasher: HasherConfig::from_env(),
        }
    }

    /// Hash parameters derived from the hasher config.
    pub fn hash_params(&self) -> HashParams {
        self.hasher.into()
    }

    /// Build the Argon2 hasher, rejecting parameters argon2 cannot use.
    pub fn build_hasher(&self) -> AppResult<Argon2Hasher> {
        Argon2Hasher::new(self.hash_params()).map_err(|e| AppError::config(e.to_string()))
    }
}
