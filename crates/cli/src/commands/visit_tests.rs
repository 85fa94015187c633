// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::session::{MemoryStore, SessionStore};
use crate::sync::test_helpers::{sample_user, server_visit};
use crate::sync::transport_tests::MockTransport;
use crate::sync::Method;
use serde_json::json;

fn logged_in_client() -> VisitClient<MockTransport, MemoryStore> {
    let client = VisitClient::new(MockTransport::new(), SessionStore::new(MemoryStore::new()));
    client
        .session()
        .set_session("abc123", &sample_user())
        .unwrap();
    client
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 6).unwrap()
}

fn new_visit_args() -> NewVisit {
    NewVisit {
        doctor: 12,
        arrival: "14:00".to_string(),
        start: "14:15".to_string(),
        departure: "14:45".to_string(),
        date: None,
        visitor: None,
        appointment: true,
    }
}

#[tokio::test]
async fn test_list_text_and_empty() {
    let client = logged_in_client();
    client.transport().queue_json(json!([server_visit()]));
    client.transport().queue_json(json!([]));

    let out = list(&client, OutputFormat::Text).await.unwrap();
    assert_eq!(
        out,
        "#41  2025-03-06  14:00:00-14:45:00  Claire Martin  (appointment)"
    );
    assert_eq!(
        list(&client, OutputFormat::Text).await.unwrap(),
        "No visits."
    );
}

#[tokio::test]
async fn test_show_json_uses_strict_types() {
    let client = logged_in_client();
    let mut visit = server_visit();
    visit["rendez_vous"] = json!("1");
    client.transport().queue_json(visit);

    let out = show(&client, 41, OutputFormat::Json).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["by_appointment"], true);
    assert_eq!(value["arrival_time"], "14:00:00");
    assert_eq!(value["visit_date"], "2025-03-06");
}

#[tokio::test]
async fn test_show_text_lists_durations() {
    let client = logged_in_client();
    client.transport().queue_json(server_visit());

    let out = show(&client, 41, OutputFormat::Text).await.unwrap();
    assert!(out.contains("Wait:            00:15:00"));
    assert!(out.contains("Visit duration:  00:45:00"));
}

#[tokio::test]
async fn test_new_defaults_date_and_visitor() {
    let client = logged_in_client();
    client.transport().queue_json(json!({"id_visite": 42}));

    let out = new(&client, new_visit_args(), today()).await.unwrap();
    assert_eq!(out, "Created visit #42");

    let body = client.transport().requests()[0].body.clone().unwrap();
    assert_eq!(body["id_visiteur"], 3);
    assert_eq!(body["date_visite"], "2025-03-06");
    assert_eq!(body["temps_attente"], "00:15:00");
}

#[tokio::test]
async fn test_new_without_ack_id() {
    let client = logged_in_client();
    client.transport().queue_response(200, "");

    let mut args = new_visit_args();
    args.date = Some("2025-04-01".to_string());
    args.visitor = Some(9);
    assert_eq!(
        new(&client, args, today()).await.unwrap(),
        "Visit created."
    );
    let body = client.transport().requests()[0].body.clone().unwrap();
    assert_eq!(body["id_visiteur"], 9);
    assert_eq!(body["heure_depart"], "2025-04-01 14:45");
}

#[tokio::test]
async fn test_new_bad_date_makes_no_request() {
    let client = logged_in_client();
    let mut args = new_visit_args();
    args.date = Some("06/03/2025".to_string());

    let err = new(&client, args, today()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(visite_core::Error::InvalidDate(_))
    ));
    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn test_new_without_session_is_auth_error() {
    let client = VisitClient::new(MockTransport::new(), SessionStore::new(MemoryStore::new()));
    let err = new(&client, new_visit_args(), today()).await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_edit_keeps_stored_durations() {
    let client = logged_in_client();
    client.transport().queue_json(json!([server_visit()]));
    client.transport().queue_json(json!({"status": "success"}));

    let changes = VisitChanges {
        departure: Some("15:30".to_string()),
        appointment: Some(false),
        ..Default::default()
    };
    assert_eq!(
        edit(&client, 41, changes).await.unwrap(),
        "Updated visit #41"
    );

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::Put);
    let body = requests[1].body.clone().unwrap();
    assert_eq!(body["heure_depart"], "2025-03-06 15:30");
    assert_eq!(body["heure_arrivee"], "2025-03-06 14:00:00");
    assert_eq!(body["temps_visite"], "00:45:00");
    assert_eq!(body["rendez_vous"], 0);
}

#[tokio::test]
async fn test_edit_doctor_drops_previous_doctor_names() {
    let client = logged_in_client();
    client.transport().queue_json(json!([server_visit()]));
    client.transport().queue_json(json!({"status": "success"}));

    let changes = VisitChanges {
        doctor: Some(15),
        ..Default::default()
    };
    edit(&client, 41, changes).await.unwrap();

    let requests = client.transport().requests();
    let body = requests[1].body.clone().unwrap();
    assert_eq!(body["id_medecin"], 15);
    assert!(body.get("nom_medecin").is_none());
    assert!(body.get("prenom_medecin").is_none());
}

#[tokio::test]
async fn test_edit_same_doctor_keeps_names() {
    let client = logged_in_client();
    client.transport().queue_json(json!([server_visit()]));
    client.transport().queue_json(json!({"status": "success"}));

    let changes = VisitChanges {
        doctor: Some(12),
        ..Default::default()
    };
    edit(&client, 41, changes).await.unwrap();

    let requests = client.transport().requests();
    let body = requests[1].body.clone().unwrap();
    assert_eq!(body["nom_medecin"], "Martin");
    assert_eq!(body["prenom_medecin"], "Claire");
}

#[tokio::test]
async fn test_edit_invalid_time_makes_no_request() {
    let client = logged_in_client();
    let changes = VisitChanges {
        arrival: Some("24:00".to_string()),
        ..Default::default()
    };
    let err = edit(&client, 41, changes).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(visite_core::Error::InvalidTime { field: "arrival time", .. })
    ));
    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn test_edit_without_changes_is_a_no_op() {
    let client = logged_in_client();
    assert_eq!(
        edit(&client, 41, VisitChanges::default()).await.unwrap(),
        "Nothing to change."
    );
    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn test_delete() {
    let client = logged_in_client();
    client.transport().queue_json(json!({"status": "success"}));
    assert_eq!(delete(&client, 41).await.unwrap(), "Deleted visit #41");
}
