// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    pub const VISITE_STATE_DIR: &str = "VISITE_STATE_DIR";
    pub const VISITE_API_URL: &str = "VISITE_API_URL";
    pub const VISITE_PASSWORD: &str = "VISITE_PASSWORD";
    pub const VISITE_LOG: &str = "VISITE_LOG";
}

/// Returns the value of `VISITE_STATE_DIR` if set and non-empty.
pub fn state_dir() -> Option<PathBuf> {
    non_empty(vars::VISITE_STATE_DIR).map(PathBuf::from)
}

/// Returns the value of `VISITE_API_URL` if set and non-empty.
pub fn api_url() -> Option<String> {
    non_empty(vars::VISITE_API_URL)
}

/// Returns the value of `VISITE_PASSWORD` if set and non-empty.
pub fn password() -> Option<String> {
    non_empty(vars::VISITE_PASSWORD)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
