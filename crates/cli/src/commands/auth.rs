// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::display::format_user;
use crate::env;
use crate::error::Result;
use crate::session::KeyValueStore;
use crate::sync::{Transport, VisitClient};

/// Log in. Without `--password` the password is read from `VISITE_PASSWORD`.
pub async fn login<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    email: &str,
    password: Option<String>,
) -> Result<String> {
    let password = password.or_else(env::password).unwrap_or_default();
    let session = client.login(email, &password).await?;
    Ok(format!("Welcome, {}!", session.user.display_name()))
}

pub fn logout<T: Transport, S: KeyValueStore>(client: &VisitClient<T, S>) -> Result<String> {
    client.logout()?;
    Ok("Logged out.".to_string())
}

pub fn whoami<T: Transport, S: KeyValueStore>(client: &VisitClient<T, S>) -> Result<String> {
    Ok(match client.session().current_user()? {
        Some(user) => format_user(&user),
        None => "not logged in".to_string(),
    })
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
