//! Shared configuration structures.

use std::env;
use std::str::FromStr;

use domain::{
    HashParams, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
};

/// Base service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "credential-service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Argon2id cost configuration for newly derived hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HasherConfig {
    /// Load from `CREDENTIAL_HASH_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (environment, test fixture, ...).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            memory_kib: parse_or(&lookup, "CREDENTIAL_HASH_MEMORY_KIB", defaults.memory_kib),
            iterations: parse_or(&lookup, "CREDENTIAL_HASH_ITERATIONS", defaults.iterations),
            parallelism: parse_or(&lookup, "CREDENTIAL_HASH_PARALLELISM", defaults.parallelism),
        }
    }
}

impl From<HasherConfig> for HashParams {
    fn from(config: HasherConfig) -> Self {
        HashParams::new(config.memory_kib, config.iterations, config.parallelism)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
