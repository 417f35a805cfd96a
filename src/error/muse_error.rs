//! Unified error type for MentalMuse.
//!
//! `MuseError` wraps every domain error so the CLI and services can
//! categorize, log and present failures the same way.

use std::fmt;

use super::auth::AuthError;
use super::capture::CaptureError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use super::storage::StorageError;

#[derive(Debug)]
pub enum MuseError {
    /// Onboarding, login and session failures.
    Auth(AuthError),

    /// Failures at the API boundary.
    Network(NetworkError),

    /// Durable storage failures.
    Storage(StorageError),

    /// Recording lifecycle failures.
    Capture(CaptureError),

    /// User input rejected before any side effect happened.
    Validation { field: &'static str, message: String },

    /// Invalid settings.
    Configuration(String),
}

impl MuseError {
    /// Shorthand for a validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        MuseError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            MuseError::Auth(err) if err.is_validation() => ErrorCategory::Validation,
            MuseError::Auth(_) => ErrorCategory::Auth,
            MuseError::Network(_) => ErrorCategory::Network,
            MuseError::Storage(_) => ErrorCategory::Storage,
            MuseError::Capture(CaptureError::PermissionDenied)
            | MuseError::Capture(CaptureError::DeviceUnavailable(_)) => ErrorCategory::Permission,
            MuseError::Capture(_) => ErrorCategory::Validation,
            MuseError::Validation { .. } => ErrorCategory::Validation,
            MuseError::Configuration(_) => ErrorCategory::Configuration,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            MuseError::Auth(err) => err.user_message(),
            MuseError::Network(err) => err.user_message(),
            MuseError::Storage(err) => err.user_message(),
            MuseError::Capture(err) => err.user_message(),
            MuseError::Validation { message, .. } => message.clone(),
            MuseError::Configuration(message) => message.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MuseError::Auth(err) => err.error_code(),
            MuseError::Network(err) => err.error_code(),
            MuseError::Storage(err) => err.error_code(),
            MuseError::Capture(err) => err.error_code(),
            MuseError::Validation { .. } => "E_VALIDATION",
            MuseError::Configuration(_) => "E_CONFIG",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for MuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuseError::Auth(err) => write!(f, "{}", err),
            MuseError::Network(err) => write!(f, "{}", err),
            MuseError::Storage(err) => write!(f, "{}", err),
            MuseError::Capture(err) => write!(f, "{}", err),
            MuseError::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            MuseError::Configuration(message) => write!(f, "Configuration error: {}", message),
        }
    }
}

impl std::error::Error for MuseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MuseError::Auth(err) => Some(err),
            MuseError::Network(err) => Some(err),
            MuseError::Storage(err) => Some(err),
            MuseError::Capture(err) => Some(err),
            MuseError::Validation { .. } | MuseError::Configuration(_) => None,
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<AuthError> for MuseError {
    fn from(err: AuthError) -> Self {
        MuseError::Auth(err)
    }
}

impl From<NetworkError> for MuseError {
    fn from(err: NetworkError) -> Self {
        MuseError::Network(err)
    }
}

impl From<StorageError> for MuseError {
    fn from(err: StorageError) -> Self {
        MuseError::Storage(err)
    }
}

impl From<CaptureError> for MuseError {
    fn from(err: CaptureError) -> Self {
        MuseError::Capture(err)
    }
}

impl From<std::io::Error> for MuseError {
    fn from(err: std::io::Error) -> Self {
        MuseError::Storage(StorageError::Io {
            path: std::path::PathBuf::new(),
            message: err.to_string(),
        })
    }
}

impl From<serde_json::Error> for MuseError {
    fn from(err: serde_json::Error) -> Self {
        MuseError::Storage(StorageError::Serialization {
            key: String::new(),
            message: err.to_string(),
        })
    }
}
