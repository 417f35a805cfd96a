use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MuseResult;
use crate::storage::keys;
use crate::traits::KeyValueStore;

/// How the user signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Anonymous,
    Email,
}

/// Persisted session state consulted by the navigation gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionFlags {
    pub onboarding_complete: bool,
    pub onboarding_timestamp: Option<DateTime<Utc>>,
    pub is_authenticated: bool,
    pub user_type: Option<UserType>,
}

impl SessionFlags {
    /// Read the flags from storage; absent keys read as false/none.
    pub fn load<S: KeyValueStore>(store: &S) -> MuseResult<Self> {
        Ok(Self {
            onboarding_complete: store
                .get_json(keys::ONBOARDING_COMPLETE)?
                .unwrap_or(false),
            onboarding_timestamp: store.get_json(keys::ONBOARDING_TIMESTAMP)?,
            is_authenticated: store.get_json(keys::IS_AUTHENTICATED)?.unwrap_or(false),
            user_type: store.get_json(keys::USER_TYPE)?,
        })
    }

    /// Flags of a user who has onboarded at `at` and is signed in.
    pub fn signed_in(at: DateTime<Utc>, user_type: UserType) -> Self {
        Self {
            onboarding_complete: true,
            onboarding_timestamp: Some(at),
            is_authenticated: true,
            user_type: Some(user_type),
        }
    }
}
