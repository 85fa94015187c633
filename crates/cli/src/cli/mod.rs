// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "visite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record medical visits against the GSB visits API")]
#[command(
    long_about = "Record medical visits against the GSB visits API.\n\n\
    Log in once; the session token is kept in the state directory until you log out."
)]
pub struct Cli {
    /// Directory holding the session and config.toml [env: VISITE_STATE_DIR]
    #[arg(long, global = true, value_name = "path")]
    pub state_dir: Option<PathBuf>,

    /// Root URL of the visits API [env: VISITE_API_URL]
    #[arg(long, global = true, value_name = "url")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Log in and store the session token
    #[command(after_help = "\
Examples:
  visite login -e lea.durand@example.com -p secret
  VISITE_PASSWORD=secret visite login -e lea.durand@example.com")]
    Login {
        /// Account email
        #[arg(long, short, value_parser = non_empty_string)]
        email: String,

        /// Account password [env: VISITE_PASSWORD]
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    // ─────────────────────────────────────────────────────────────────────────
    // Visits
    // ─────────────────────────────────────────────────────────────────────────
    /// List visits
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show one visit with its wait and visit durations
    Show {
        /// Visit id
        id: i64,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Record a new visit
    #[command(after_help = "\
Examples:
  visite new --doctor 12 --arrival 14:00 --start 14:15 --departure 14:45
  visite new --doctor 12 --arrival 9:05 --start 9:30 --departure 10:00 --date 2025-03-06 --appointment")]
    New {
        /// Doctor id
        #[arg(long)]
        doctor: i64,

        /// Arrival time (HH:MM)
        #[arg(long)]
        arrival: String,

        /// Interview start time (HH:MM)
        #[arg(long)]
        start: String,

        /// Departure time (HH:MM)
        #[arg(long)]
        departure: String,

        /// Visit date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Visitor id, defaults to the logged-in user
        #[arg(long)]
        visitor: Option<i64>,

        /// The visit was scheduled
        #[arg(long)]
        appointment: bool,
    },

    /// Change fields of an existing visit
    ///
    /// Stored wait and visit durations are sent back unchanged.
    Edit {
        /// Visit id
        id: i64,

        /// Arrival time (HH:MM)
        #[arg(long)]
        arrival: Option<String>,

        /// Interview start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// Departure time (HH:MM)
        #[arg(long)]
        departure: Option<String>,

        /// Visit date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Whether the visit was scheduled
        #[arg(long, value_name = "true|false")]
        appointment: Option<bool>,

        /// Doctor id
        #[arg(long)]
        doctor: Option<i64>,
    },

    /// Delete a visit
    Delete {
        /// Visit id
        id: i64,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Directory
    // ─────────────────────────────────────────────────────────────────────────
    /// List cabinets, nearest first when a position is given
    Cabinets {
        /// Latitude of the current position
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude of the current position
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// List doctors
    Doctors {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
