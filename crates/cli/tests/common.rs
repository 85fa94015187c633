// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Unroutable API root: commands that reach the network fail fast.
pub const OFFLINE_API: &str = "http://127.0.0.1:9/API";

/// `visite` isolated from the caller's environment and state.
pub fn visite(state: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("visite");
    cmd.env_remove("VISITE_PASSWORD")
        .env_remove("VISITE_LOG")
        .env("VISITE_STATE_DIR", state.path())
        .env("VISITE_API_URL", OFFLINE_API);
    cmd
}

/// Write a session the way `visite login` does.
pub fn seed_session(state: &TempDir) {
    std::fs::write(state.path().join("userToken"), "abc123").unwrap();
    std::fs::write(
        state.path().join("userData"),
        r#"{"id":3,"nom":"Durand","prenom":"Léa","email":"lea.durand@example.com"}"#,
    )
    .unwrap();
}
