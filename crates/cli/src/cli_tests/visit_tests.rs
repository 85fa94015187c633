// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_list_defaults_to_text() {
    let cli = parse(&["visite", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::List {
            output: OutputFormat::Text
        }
    ));
}

#[test]
fn test_show_json() {
    let cli = parse(&["visite", "show", "41", "-o", "json"]).unwrap();
    match cli.command {
        Command::Show { id, output } => {
            assert_eq!(id, 41);
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn test_show_rejects_non_numeric_id() {
    assert!(parse(&["visite", "show", "abc"]).is_err());
}

#[test]
fn test_new_with_all_fields() {
    let cli = parse(&[
        "visite",
        "new",
        "--doctor",
        "12",
        "--arrival",
        "14:00",
        "--start",
        "14:15",
        "--departure",
        "14:45",
        "--date",
        "2025-03-06",
        "--visitor",
        "3",
        "--appointment",
    ])
    .unwrap();
    match cli.command {
        Command::New {
            doctor,
            arrival,
            start,
            departure,
            date,
            visitor,
            appointment,
        } => {
            assert_eq!(doctor, 12);
            assert_eq!(arrival, "14:00");
            assert_eq!(start, "14:15");
            assert_eq!(departure, "14:45");
            assert_eq!(date.as_deref(), Some("2025-03-06"));
            assert_eq!(visitor, Some(3));
            assert!(appointment);
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn test_new_defaults() {
    let cli = parse(&[
        "visite",
        "new",
        "--doctor",
        "12",
        "--arrival",
        "14:00",
        "--start",
        "14:15",
        "--departure",
        "14:45",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::New {
            date: None,
            visitor: None,
            appointment: false,
            ..
        }
    ));
}

#[test]
fn test_new_requires_times() {
    assert!(parse(&["visite", "new", "--doctor", "12", "--arrival", "14:00"]).is_err());
}

#[test]
fn test_edit_appointment_takes_a_value() {
    let cli = parse(&["visite", "edit", "41", "--appointment", "false"]).unwrap();
    match cli.command {
        Command::Edit {
            id,
            appointment,
            arrival,
            ..
        } => {
            assert_eq!(id, 41);
            assert_eq!(appointment, Some(false));
            assert_eq!(arrival, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn test_delete() {
    let cli = parse(&["visite", "delete", "41"]).unwrap();
    assert!(matches!(cli.command, Command::Delete { id: 41 }));
}
