//! Domain-level constants.
//!
//! These constants define hashing defaults and the login result codes.

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Default memory cost in KiB (64 MiB)
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 65_536;

/// Default number of passes over memory
pub const DEFAULT_HASH_ITERATIONS: u32 = 20;

/// Default degree of parallelism (lanes)
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Login Result Codes
// =============================================================================

/// Email and password matched a stored record
pub const LOGIN_OK: i32 = 1;

/// No record is stored under the email
pub const LOGIN_UNKNOWN_EMAIL: i32 = -1;

/// A record exists but the password did not verify
pub const LOGIN_BAD_PASSWORD: i32 = -2;
