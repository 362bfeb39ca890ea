//! Credential directory business logic.

mod directory;

pub use directory::{CredentialDirectory, CredentialService};
