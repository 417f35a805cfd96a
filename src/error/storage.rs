//! Durable local storage error types.

use std::fmt;
use std::path::PathBuf;

/// Errors from the key-value storage layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    Io { path: PathBuf, message: String },

    /// A stored value could not be encoded or decoded.
    Serialization { key: String, message: String },

    /// No data directory could be determined.
    NoDataDirectory,

    /// The backend refused the write (used by test doubles).
    WriteRejected { key: String },
}

impl StorageError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StorageError::Io { path, .. } => {
                format!("Could not access {}.", path.display())
            }
            StorageError::Serialization { key, .. } => {
                format!("Saved data for '{}' is unreadable.", key)
            }
            StorageError::NoDataDirectory => {
                "Could not determine where to store your data. Set MUSE_DATA_DIR.".to_string()
            }
            StorageError::WriteRejected { key } => format!("Could not save '{}'.", key),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "E_STORE_IO",
            StorageError::Serialization { .. } => "E_STORE_SERDE",
            StorageError::NoDataDirectory => "E_STORE_NO_DIR",
            StorageError::WriteRejected { .. } => "E_STORE_REJECTED",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn serde(key: impl Into<String>, err: serde_json::Error) -> Self {
        StorageError::Serialization {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { path, message } => {
                write!(f, "Storage I/O error at {}: {}", path.display(), message)
            }
            StorageError::Serialization { key, message } => {
                write!(f, "Failed to (de)serialize '{}': {}", key, message)
            }
            StorageError::NoDataDirectory => write!(f, "No data directory available"),
            StorageError::WriteRejected { key } => write!(f, "Write rejected for '{}'", key),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_helper() {
        let err = StorageError::io(
            "/tmp/x.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.error_code(), "E_STORE_IO");
        assert!(err.to_string().contains("denied"));
        assert!(err.user_message().contains("/tmp/x.json"));
    }

    #[test]
    fn test_serde_helper() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = StorageError::serde("userProgress", json_err);
        assert!(matches!(err, StorageError::Serialization { ref key, .. } if key == "userProgress"));
    }
}
