// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vsrs - client library for the GSB visits API.
//!
//! This crate provides the functionality behind the `visite` CLI tool: a
//! persisted login session and an authenticated client for recording
//! medical visits.
//!
//! # Main Components
//!
//! - [`SessionStore`] - Token and user persistence over a [`KeyValueStore`]
//! - [`VisitClient`](sync::VisitClient) - Visits, cabinets and doctors over a [`Transport`](sync::Transport)
//! - [`Config`] - API root and request timeout
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use vsrs::{Config, FileStore, SessionStore};
//! use vsrs::sync::{ReqwestTransport, VisitClient};
//!
//! let config = Config::load_or_default(&state_dir)?;
//! let client = VisitClient::new(
//!     ReqwestTransport::new(&config)?,
//!     SessionStore::new(FileStore::new(&state_dir)),
//! );
//! client.login("lea.durand@example.com", "secret").await?;
//! let visits = client.list_visits().await?;
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod env;
pub mod error;
pub mod session;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::visit::{NewVisit, VisitChanges};
pub use config::{resolve_state_dir, Config};
pub use error::{Error, Result};
pub use session::{FileStore, KeyValueStore, MemoryStore, SessionStore};

use sync::{ReqwestTransport, Transport, VisitClient};

/// Execute a CLI invocation: resolve the state directory and configuration,
/// build the client, run the command and print its output.
pub async fn run(cli: Cli) -> Result<()> {
    let state_dir = resolve_state_dir(cli.state_dir)?;
    let config =
        Config::load_or_default(&state_dir)?.with_base_url(cli.api_url.or_else(env::api_url))?;
    tracing::debug!(
        "state_dir={} api={}",
        state_dir.display(),
        config.api_root()
    );

    let client = VisitClient::new(
        ReqwestTransport::new(&config)?,
        SessionStore::new(FileStore::new(&state_dir)),
    );
    let output = execute(&client, cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Run one command against a client and return what it prints. This is the
/// testable entry point: no process, no real network.
pub async fn execute<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    command: Command,
) -> Result<String> {
    match command {
        Command::Login { email, password } => {
            commands::auth::login(client, &email, password).await
        }
        Command::Logout => commands::auth::logout(client),
        Command::Whoami => commands::auth::whoami(client),
        Command::List { output } => commands::visit::list(client, output).await,
        Command::Show { id, output } => commands::visit::show(client, id, output).await,
        Command::New {
            doctor,
            arrival,
            start,
            departure,
            date,
            visitor,
            appointment,
        } => {
            let args = NewVisit {
                doctor,
                arrival,
                start,
                departure,
                date,
                visitor,
                appointment,
            };
            let today = chrono::Local::now().date_naive();
            commands::visit::new(client, args, today).await
        }
        Command::Edit {
            id,
            arrival,
            start,
            departure,
            date,
            appointment,
            doctor,
        } => {
            let changes = VisitChanges {
                arrival,
                start,
                departure,
                date,
                appointment,
                doctor,
            };
            commands::visit::edit(client, id, changes).await
        }
        Command::Delete { id } => commands::visit::delete(client, id).await,
        Command::Cabinets { lat, lon, output } => {
            commands::directory::cabinets(client, lat, lon, output).await
        }
        Command::Doctors { output } => commands::directory::doctors(client, output).await,
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
