// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor accounts and the login exchange.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::wire::{int_field, text_field};

/// The logged-in visitor.
///
/// Serialized with the backend's field names, which is also how the session
/// store persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A token plus the user it was issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Body of `POST /ApiAuth.php`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Builds a request, rejecting blank credentials.
    ///
    /// The email is trimmed; the password is sent as typed.
    pub fn new(email: &str, password: &str) -> Result<Self> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::MissingField { field: "email" });
        }
        if password.trim().is_empty() {
            return Err(Error::MissingField { field: "password" });
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// The user object of a login reply, as the server sends it.
///
/// The id may arrive as a numeric string and the names may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireUser {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    nom: Value,
    #[serde(default)]
    prenom: Value,
    #[serde(default)]
    email: Value,
}

impl WireUser {
    pub fn into_user(self) -> Result<User> {
        Ok(User {
            id: int_field("id", &self.id)?,
            last_name: text_field(&self.nom).unwrap_or_default(),
            first_name: text_field(&self.prenom).unwrap_or_default(),
            email: text_field(&self.email).unwrap_or_default(),
        })
    }
}

/// Reply to a login attempt. Only a reply carrying both a token and a
/// user counts as a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<WireUser>,
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// `Ok(None)` when the token or user is missing; an error when the user
    /// is present but its id is unusable.
    pub fn into_session(self) -> Result<Option<Session>> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(Some(Session {
                token,
                user: user.into_user()?,
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
