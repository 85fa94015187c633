// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations.
//!
//! Each command runs against a [`VisitClient`](crate::sync::VisitClient) and
//! returns the text to print, so it can be exercised without a process.

pub mod auth;
pub mod directory;
pub mod visit;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Render a list either as JSON or one line per item.
fn render_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
    line: impl Fn(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&items),
        OutputFormat::Text if items.is_empty() => Ok(empty.to_string()),
        OutputFormat::Text => Ok(items.iter().map(line).collect::<Vec<_>>().join("\n")),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Encode(e.to_string()))
}
