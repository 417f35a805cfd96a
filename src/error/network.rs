//! API boundary error types.
//!
//! Every failed call is reported to the user with a generic
//! "Failed to ..." message for the action that triggered it; the
//! technical detail is kept for logs only.

use std::fmt;

/// The client-side action an API call was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    LoadPosts,
    CreatePost,
    AddComment,
    AddReply,
    LikePost,
    AnalyzeAudio,
    SignIn,
    Register,
}

impl ApiAction {
    /// The generic message surfaced to the user when the action fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ApiAction::LoadPosts => "Failed to load posts",
            ApiAction::CreatePost => "Failed to create post",
            ApiAction::AddComment => "Failed to add comment",
            ApiAction::AddReply => "Failed to add reply",
            ApiAction::LikePost => "Failed to like post",
            ApiAction::AnalyzeAudio => "Failed to analyze recording",
            ApiAction::SignIn => "Login failed. Please try again.",
            ApiAction::Register => "Registration failed",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAction::LoadPosts => "load_posts",
            ApiAction::CreatePost => "create_post",
            ApiAction::AddComment => "add_comment",
            ApiAction::AddReply => "add_reply",
            ApiAction::LikePost => "like_post",
            ApiAction::AnalyzeAudio => "analyze_audio",
            ApiAction::SignIn => "sign_in",
            ApiAction::Register => "register",
        }
    }
}

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The request never produced a response (connection refused, timeout).
    Unreachable { action: ApiAction, message: String },

    /// The server answered with a non-success HTTP status.
    HttpStatus {
        action: ApiAction,
        status: u16,
        message: String,
    },

    /// The server answered `{"success": false, ...}`.
    Rejected { action: ApiAction, message: String },

    /// The response body could not be decoded.
    InvalidResponse { action: ApiAction, message: String },
}

impl NetworkError {
    /// The action that failed.
    pub fn action(&self) -> ApiAction {
        match self {
            NetworkError::Unreachable { action, .. }
            | NetworkError::HttpStatus { action, .. }
            | NetworkError::Rejected { action, .. }
            | NetworkError::InvalidResponse { action, .. } => *action,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        self.action().failure_message().to_string()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::Unreachable { .. } => "E_NET_UNREACHABLE",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Rejected { .. } => "E_NET_REJECTED",
            NetworkError::InvalidResponse { .. } => "E_NET_DECODE",
        }
    }

    /// The HTTP status, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Unreachable { action, message } => {
                write!(f, "{} unreachable: {}", action.as_str(), message)
            }
            NetworkError::HttpStatus {
                action,
                status,
                message,
            } => write!(f, "{} returned HTTP {}: {}", action.as_str(), status, message),
            NetworkError::Rejected { action, message } => {
                write!(f, "{} rejected: {}", action.as_str(), message)
            }
            NetworkError::InvalidResponse { action, message } => {
                write!(f, "{} returned an invalid response: {}", action.as_str(), message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_generic() {
        let err = NetworkError::HttpStatus {
            action: ApiAction::LoadPosts,
            status: 500,
            message: "stack trace here".to_string(),
        };
        assert_eq!(err.user_message(), "Failed to load posts");
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("stack trace here"));
    }

    #[test]
    fn test_action_accessor() {
        let err = NetworkError::Rejected {
            action: ApiAction::AddReply,
            message: "Comment not found".to_string(),
        };
        assert_eq!(err.action(), ApiAction::AddReply);
        assert_eq!(err.user_message(), "Failed to add reply");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(ApiAction::CreatePost.failure_message(), "Failed to create post");
        assert_eq!(ApiAction::AddComment.failure_message(), "Failed to add comment");
        assert_eq!(ApiAction::LikePost.failure_message(), "Failed to like post");
    }
}
