//! Audio capture error types.

use thiserror::Error;

/// Message shown when the microphone cannot be opened.
pub const MICROPHONE_DENIED_MESSAGE: &str =
    "Could not access microphone. Please ensure you have granted permission.";

/// Errors from the recording lifecycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("Audio device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("A recording is already in progress")]
    AlreadyRecording,

    #[error("No recording in progress")]
    NotRecording,
}

impl CaptureError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CaptureError::PermissionDenied | CaptureError::DeviceUnavailable(_) => {
                MICROPHONE_DENIED_MESSAGE.to_string()
            }
            CaptureError::AlreadyRecording => "Already recording.".to_string(),
            CaptureError::NotRecording => "Nothing is being recorded.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied => "E_CAP_DENIED",
            CaptureError::DeviceUnavailable(_) => "E_CAP_DEVICE",
            CaptureError::AlreadyRecording => "E_CAP_BUSY",
            CaptureError::NotRecording => "E_CAP_IDLE",
        }
    }
}
