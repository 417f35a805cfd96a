//! Session and authentication error types.

use std::fmt;

/// Errors raised by the onboarding and login flows.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Email login was attempted with an empty email or password.
    EmptyFields,

    /// A protected operation was attempted without signing in.
    NotAuthenticated,

    /// Onboarding has not been completed (or has expired).
    OnboardingRequired,

    /// An onboarding answer is not one of the offered options.
    InvalidAnswer { question: u8, answer: String },

    /// Onboarding was asked to continue after it already finished.
    OnboardingFinished,

    /// The server refused to issue or accept a session token.
    TokenRejected { message: String },
}

impl AuthError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::EmptyFields => "Please fill in all fields".to_string(),
            AuthError::NotAuthenticated => "Please sign in to continue.".to_string(),
            AuthError::OnboardingRequired => {
                "Please complete onboarding before continuing.".to_string()
            }
            AuthError::InvalidAnswer { answer, .. } => {
                format!("\"{}\" is not one of the available answers.", answer)
            }
            AuthError::OnboardingFinished => "Onboarding is already complete.".to_string(),
            AuthError::TokenRejected { .. } => "Login failed. Please try again.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::EmptyFields => "E_AUTH_EMPTY",
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
            AuthError::OnboardingRequired => "E_AUTH_ONBOARD",
            AuthError::InvalidAnswer { .. } => "E_AUTH_ANSWER",
            AuthError::OnboardingFinished => "E_AUTH_ONBOARD_DONE",
            AuthError::TokenRejected { .. } => "E_AUTH_TOKEN",
        }
    }

    /// Validation failures come from user input rather than session state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::EmptyFields | AuthError::InvalidAnswer { .. } | AuthError::OnboardingFinished
        )
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyFields => write!(f, "Email and password are required"),
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::OnboardingRequired => write!(f, "Onboarding required"),
            AuthError::InvalidAnswer { question, answer } => {
                write!(f, "Invalid answer for question {}: {}", question, answer)
            }
            AuthError::OnboardingFinished => write!(f, "Onboarding already finished"),
            AuthError::TokenRejected { message } => write!(f, "Session token rejected: {}", message),
        }
    }
}

impl std::error::Error for AuthError {}
