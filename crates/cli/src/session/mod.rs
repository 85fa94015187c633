// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session persistence: the bearer token and the logged-in user.
//!
//! A session is either present or absent. It is written on login as two
//! independent entries and removed on logout:
//!
//! | key         | value                        |
//! |-------------|------------------------------|
//! | `userToken` | raw token string             |
//! | `userData`  | JSON-serialized [`User`]     |
//!
//! The token is never checked for expiry; it stays valid until the server
//! rejects it.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};

use visite_core::{Session, User};

use crate::error::{Error, Result};

/// Store key for the bearer token.
pub const TOKEN_KEY: &str = "userToken";
/// Store key for the serialized user.
pub const USER_KEY: &str = "userData";

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Storage(e.to_string())
    }
}

/// Session state on top of a [`KeyValueStore`].
pub struct SessionStore<S: KeyValueStore = FileStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        SessionStore { store }
    }

    /// Persist a token and its user.
    ///
    /// The token is written first. If the user write fails the token stays
    /// behind; there is no rollback.
    pub fn set_session(&self, token: &str, user: &User) -> Result<()> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| Error::Storage(format!("cannot serialize user: {}", e)))?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user_json)?;
        tracing::debug!("session stored for user {}", user.id);
        Ok(())
    }

    /// The stored token, if any. An empty token counts as absent.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.store.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// The stored user, if any.
    pub fn current_user(&self) -> Result<Option<User>> {
        match self.store.get(USER_KEY)? {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| Error::Deserialization(format!("{}: {}", USER_KEY, e))),
        }
    }

    /// Both halves of the session, when both are present.
    pub fn session(&self) -> Result<Option<Session>> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };
        Ok(self.current_user()?.map(|user| Session { token, user }))
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }

    /// Remove both entries. Clearing an absent session is not an error.
    ///
    /// Both removals are attempted even if the first one fails.
    pub fn clear_session(&self) -> Result<()> {
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token?;
        user?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// The underlying key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
