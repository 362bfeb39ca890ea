//! Unified error handling for the service binary and shell.
//!
//! Domain errors convert into `AppError`; the shell turns an `AppError`
//! into a one-line message with `user_message()`.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O on the shell's input or output
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidCommand(_) => "INVALID_COMMAND",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCommand(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            // Hide details for internal errors
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An I/O error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::Password(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        AppError::InvalidCommand(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_conflict_maps_to_conflict() {
        let err: AppError = DomainError::conflict("User").into();
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.user_message(), "User already exists");
    }

    #[test]
    fn test_domain_validation_keeps_message() {
        let err: AppError = DomainError::validation("Email must not be empty").into();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.user_message(), "Email must not be empty");
    }

    #[test]
    fn test_password_error_is_hidden() {
        let err: AppError = DomainError::password("Password hash failed: salt too short").into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: AppError = io.into();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
