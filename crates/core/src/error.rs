// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for visite-core operations.

use thiserror::Error;

/// All possible errors raised by the pure domain layer.
///
/// These are validation and decode failures: nothing here performs I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid {field}: '{value}'\n  hint: expected HH:MM or HH:MM:SS (00:00 to 23:59)")]
    InvalidTime { field: &'static str, value: String },

    #[error("invalid date: '{0}'\n  hint: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid duration: '{0}'\n  hint: expected HH:MM:SS")]
    InvalidDuration(String),

    #[error("invalid position: {0}\n  hint: latitude within -90..90, longitude within -180..180")]
    InvalidPosition(String),

    #[error("malformed server payload: {0}")]
    Decode(String),

    #[error("invalid {field} in server payload: {reason}")]
    InvalidWireField { field: &'static str, reason: String },
}

/// A specialized Result type for visite-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
