// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::TransportError;

/// All possible errors that can occur in the vsrs library.
///
/// Validation errors are raised before any I/O. Everything else is passed to
/// the caller unchanged; deciding what to show the user is the caller's job.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] visite_core::Error),

    #[error("not authenticated: {0}\n  hint: run 'visite login' first")]
    Auth(String),

    #[error("cannot reach server: {0}")]
    Network(#[from] TransportError),

    #[error("server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("visit not found: {0}")]
    VisitNotFound(i64),

    #[error("unexpected server response: {0}")]
    InvalidResponse(String),

    #[error("cannot encode JSON: {0}")]
    Encode(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("corrupted session data: {0}")]
    Deserialization(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for vsrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors that mean the user must log in again.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
