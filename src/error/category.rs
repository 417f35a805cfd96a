//! Error category classification for unified error handling.
//!
//! Categories mirror the three failure families the app distinguishes
//! (validation, permission, network) plus the ambient ones every client
//! carries (storage, auth, configuration).

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid or incomplete user input.
    Validation,

    /// A platform capability was refused (microphone access).
    Permission,

    /// The API boundary could not be reached or rejected the call.
    Network,

    /// Durable local storage could not be read or written.
    Storage,

    /// The user is not signed in or the session is not usable.
    Auth,

    /// Invalid settings or environment.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the user can fix the problem themselves.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Validation | ErrorCategory::Permission | ErrorCategory::Auth
        )
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Permission => "permission",
            ErrorCategory::Network => "network",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::Permission => "Grant the requested permission and try again",
            ErrorCategory::Network => "Check that the MentalMuse server is running and try again",
            ErrorCategory::Storage => "Check file permissions and available disk space",
            ErrorCategory::Auth => "Sign in again to continue",
            ErrorCategory::Configuration => "Check your MUSE_* environment settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
