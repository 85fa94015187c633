// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "visite",
        "list",
        "--state-dir",
        "/tmp/visite",
        "--api-url",
        "http://localhost:8080/API",
    ])
    .unwrap();
    assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/visite")));
    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080/API"));
}

#[test]
fn test_global_flags_default_to_none() {
    let cli = parse(&["visite", "whoami"]).unwrap();
    assert_eq!(cli.state_dir, None);
    assert_eq!(cli.api_url, None);
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(parse(&["visite"]).is_err());
}

#[test]
fn test_unknown_output_format_is_error() {
    assert!(parse(&["visite", "list", "-o", "yaml"]).is_err());
}
