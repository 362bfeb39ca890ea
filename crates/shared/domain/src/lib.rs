//! Domain layer - Core entities, value objects and the hashing boundary.
//!
//! This crate contains pure domain logic with no I/O of its own.
//! The directory service builds on these types.

pub mod constants;
pub mod error;
pub mod hasher;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use password::{HashParams, Password};
pub use user::{LoginOutcome, UserRecord};
