// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use serde_json::{json, Value};
use visite_core::{User, VisitInput};

pub fn sample_user() -> User {
    User {
        id: 3,
        last_name: "Durand".to_string(),
        first_name: "Léa".to_string(),
        email: "lea.durand@example.com".to_string(),
    }
}

/// Form input for the 2025-03-06 visit: 14:00 arrival, 14:15 start,
/// 14:45 departure, by appointment.
pub fn scenario_input() -> VisitInput {
    VisitInput {
        visitor_id: 3,
        doctor_id: 12,
        visit_date: NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
        arrival_time: Some("14:00".to_string()),
        interview_start_time: Some("14:15".to_string()),
        departure_time: Some("14:45".to_string()),
        by_appointment: true,
    }
}

/// The same visit as the server returns it.
pub fn server_visit() -> Value {
    json!({
        "id_visite": 41,
        "date_visite": "2025-03-06",
        "heure_arrivee": "2025-03-06 14:00:00",
        "heure_debut_entretien": "2025-03-06 14:15:00",
        "heure_depart": "2025-03-06 14:45:00",
        "rendez_vous": 1,
        "id_medecin": 12,
        "id_visiteur": 3,
        "nom_medecin": "Martin",
        "prenom_medecin": "Claire",
        "temps_attente": "00:15:00",
        "temps_visite": "00:45:00"
    })
}
