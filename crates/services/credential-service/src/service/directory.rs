//! Credential directory - registration and login over in-memory records.
//!
//! Records live in a map keyed by exact email. Hashing is delegated to a
//! `CredentialHasher`; no lock is held while a hash is derived or verified.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::{
    Argon2Hasher, CredentialHasher, DomainError, DomainResult, HashParams, LoginOutcome,
    UserRecord,
};
use tracing::{debug, info};

/// Credential service trait for dependency injection.
pub trait CredentialService: Send + Sync {
    /// Register a user, reporting why a registration was refused.
    ///
    /// # Errors
    /// - `Validation` if email or password is empty
    /// - `Conflict` if the email is already registered
    /// - `Password` if the hasher fails
    fn try_register(&self, email: &str, password: &str) -> DomainResult<UserRecord>;

    /// Authenticate a user against the stored hash
    fn login(&self, email: &str, password: &str) -> LoginOutcome;

    /// Number of stored records
    fn len(&self) -> usize;

    /// Whether a record exists for this exact email
    fn contains(&self, email: &str) -> bool;

    /// Snapshot of all records, sorted by email
    fn records(&self) -> Vec<UserRecord>;

    /// Register a user; `false` covers every refusal reason
    fn register(&self, email: &str, password: &str) -> bool {
        self.try_register(email, password).is_ok()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory implementation of CredentialService.
pub struct CredentialDirectory<H: CredentialHasher = Argon2Hasher> {
    hasher: H,
    users: RwLock<HashMap<String, UserRecord>>,
}

impl<H: CredentialHasher> CredentialDirectory<H> {
    /// Create an empty directory using the given hasher
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    // The map is only ever changed by a single insert, so a poisoned
    // lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, UserRecord>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, UserRecord>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialDirectory<Argon2Hasher> {
    /// Create an empty directory backed by Argon2id with the given costs.
    ///
    /// # Errors
    /// Returns a password error if the parameters are out of range.
    pub fn with_params(params: HashParams) -> DomainResult<Self> {
        Ok(Self::new(Argon2Hasher::new(params)?))
    }
}

impl<H: CredentialHasher> CredentialService for CredentialDirectory<H> {
    fn try_register(&self, email: &str, password: &str) -> DomainResult<UserRecord> {
        if email.is_empty() {
            return Err(DomainError::validation("Email must not be empty"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("Password must not be empty"));
        }

        // Cheap rejection before paying for a hash
        if self.contains(email) {
            debug!("Registration refused, email already stored");
            return Err(DomainError::conflict("User"));
        }

        let password_hash = self.hasher.derive_hash(password)?;

        // Another caller may have registered the email while we were hashing
        let mut users = self.write();
        match users.entry(email.to_string()) {
            Entry::Occupied(_) => {
                debug!("Registration lost race for the same email");
                Err(DomainError::conflict("User"))
            }
            Entry::Vacant(slot) => {
                let record = slot
                    .insert(UserRecord::new(email.to_string(), password_hash))
                    .clone();
                info!("User registered ({} records)", users.len());
                Ok(record)
            }
        }
    }

    fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let stored = self.read().get(email).map(|user| user.password_hash().clone());

        let outcome = match stored {
            None => LoginOutcome::UnknownEmail,
            Some(hash) if self.hasher.verify(&hash, password) => LoginOutcome::Ok,
            Some(_) => LoginOutcome::BadPassword,
        };

        debug!("Login attempt finished: {}", outcome.label());
        outcome
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn contains(&self, email: &str) -> bool {
        self.read().contains_key(email)
    }

    fn records(&self) -> Vec<UserRecord> {
        let mut records: Vec<UserRecord> = self.read().values().cloned().collect();
        records.sort_by(|a, b| a.email().cmp(b.email()));
        records
    }
}
