//! Local storage layout.
//!
//! All client state lives in a single JSON document (`storage.json`) in the
//! data directory, addressed by the keys in [`keys`].

use std::path::PathBuf;

use crate::error::StorageError;

/// Data directory name under the user's home.
const DATA_DIR: &str = ".mentalmuse";

/// File holding the key-value document.
pub const STORAGE_FILE: &str = "storage.json";

/// Directory (inside the data dir) where vent recordings are written.
pub const RECORDINGS_DIR: &str = "recordings";

/// Storage keys.
pub mod keys {
    pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
    pub const ONBOARDING_TIMESTAMP: &str = "onboardingTimestamp";
    pub const ONBOARDING_ANSWERS: &str = "onboardingAnswers";
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    pub const USER_TYPE: &str = "userType";
    pub const USER_ID: &str = "userId";
    pub const EMAIL: &str = "email";
    pub const TOKEN: &str = "token";
    pub const USER_PROGRESS: &str = "userProgress";
    pub const QUEST_BOARD: &str = "questBoard";
    pub const COMMUNITY_POSTS: &str = "communityPosts";
    pub const ACCEPTANCE_THERAPY_POSTS: &str = "acceptanceTherapyPosts";
    pub const MOOD_ENTRIES: &str = "moodEntries";
    pub const VENT_ENTRIES: &str = "ventEntries";
    /// Ids of server posts liked from this device
    pub const REMOTE_LIKED_POSTS: &str = "remoteLikedPosts";

    /// Keys removed on logout.
    pub const AUTH_KEYS: [&str; 5] = [IS_AUTHENTICATED, USER_TYPE, USER_ID, EMAIL, TOKEN];
}

/// Default data directory (`~/.mentalmuse`).
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR))
        .ok_or(StorageError::NoDataDirectory)
}
