//! User record entity and login outcome.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{LOGIN_BAD_PASSWORD, LOGIN_OK, LOGIN_UNKNOWN_EMAIL};
use crate::password::Password;

/// Stored credentials for one user.
///
/// Both fields are fixed at registration; there is no update path.
/// Serializing a record yields only the email and registration time.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    email: String,
    #[serde(skip_serializing)]
    password_hash: Password,
    created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record stamped with the current time
    pub fn new(email: String, password_hash: Password) -> Self {
        Self {
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &Password {
        &self.password_hash
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Ok,
    UnknownEmail,
    BadPassword,
}

impl LoginOutcome {
    /// Integer result code: 1, -1 or -2
    pub fn code(&self) -> i32 {
        match self {
            LoginOutcome::Ok => LOGIN_OK,
            LoginOutcome::UnknownEmail => LOGIN_UNKNOWN_EMAIL,
            LoginOutcome::BadPassword => LOGIN_BAD_PASSWORD,
        }
    }

    /// Short lowercase label used in shell output
    pub fn label(&self) -> &'static str {
        match self {
            LoginOutcome::Ok => "ok",
            LoginOutcome::UnknownEmail => "unknown_email",
            LoginOutcome::BadPassword => "bad_password",
        }
    }
}

impl std::fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.label())
    }
}
