//! Session side effects: onboarding completion, login and logout.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::flags::{SessionFlags, UserType};
use super::anonymous_id;
use crate::error::{AuthError, MuseResult};
use crate::storage::keys;
use crate::traits::KeyValueStore;

/// Reads and writes the session keys in local storage.
pub struct SessionManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn flags(&self) -> MuseResult<SessionFlags> {
        SessionFlags::load(&self.store)
    }

    /// Persist onboarding completion stamped at `now`.
    pub fn complete_onboarding(
        &self,
        answers: &BTreeMap<u8, String>,
        now: DateTime<Utc>,
    ) -> MuseResult<()> {
        self.store.set_json(keys::ONBOARDING_ANSWERS, answers)?;
        self.store.set_json(keys::ONBOARDING_TIMESTAMP, &now)?;
        self.store.set_json(keys::ONBOARDING_COMPLETE, &true)?;
        tracing::info!(answers = answers.len(), "onboarding completed");
        Ok(())
    }

    pub fn onboarding_answers(&self) -> MuseResult<BTreeMap<u8, String>> {
        Ok(self
            .store
            .get_json(keys::ONBOARDING_ANSWERS)?
            .unwrap_or_default())
    }

    /// Sign in without an account. Returns the synthesized user id.
    pub fn login_anonymous(&self) -> MuseResult<String> {
        let user_id = anonymous_id();
        self.store.set_json(keys::USER_ID, &user_id)?;
        self.store.remove(keys::EMAIL)?;
        self.store.set_json(keys::USER_TYPE, &UserType::Anonymous)?;
        self.store.set_json(keys::IS_AUTHENTICATED, &true)?;
        tracing::info!(user_id = %user_id, "signed in anonymously");
        Ok(user_id)
    }

    /// Sign in with email and password.
    ///
    /// Credentials are only checked for presence; the user id is the email.
    pub fn login_email(&self, email: &str, password: &str) -> MuseResult<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyFields.into());
        }
        self.store.set_json(keys::USER_ID, &email)?;
        self.store.set_json(keys::EMAIL, &email)?;
        self.store.set_json(keys::USER_TYPE, &UserType::Email)?;
        self.store.set_json(keys::IS_AUTHENTICATED, &true)?;
        tracing::info!("signed in with email");
        Ok(())
    }

    pub fn store_token(&self, token: &str) -> MuseResult<()> {
        self.store.set_json(keys::TOKEN, &token)?;
        Ok(())
    }

    pub fn token(&self) -> MuseResult<Option<String>> {
        Ok(self.store.get_json(keys::TOKEN)?)
    }

    pub fn user_id(&self) -> MuseResult<Option<String>> {
        Ok(self.store.get_json(keys::USER_ID)?)
    }

    pub fn email(&self) -> MuseResult<Option<String>> {
        Ok(self.store.get_json(keys::EMAIL)?)
    }

    /// Remove authentication state. Onboarding state is kept.
    pub fn logout(&self) -> MuseResult<()> {
        for key in keys::AUTH_KEYS {
            self.store.remove(key)?;
        }
        tracing::info!("signed out");
        Ok(())
    }

    /// Fail unless the user is signed in.
    pub fn require_authenticated(&self) -> MuseResult<SessionFlags> {
        let flags = self.flags()?;
        if !flags.is_authenticated {
            return Err(AuthError::NotAuthenticated.into());
        }
        Ok(flags)
    }
}
