// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire format exchanged with the visits backend.
//!
//! Two directions:
//! - [`VisitPayload`] is what the client sends: datetimes as
//!   `YYYY-MM-DD HH:MM[:SS]`, durations as `HH:MM:SS`, the appointment flag
//!   as `0`/`1`.
//! - [`WireVisit`] is what the server returns. It is decoded leniently (ids as
//!   numbers or strings, the flag as a boolean, an integer, a string or
//!   nothing) and normalized into a strict [`Visit`] right here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clock::{Span, WallClock};
use crate::error::{Error, Result};
use crate::visit::{Visit, VisitInput};

/// Date format used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for creating or updating a visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_visite: Option<i64>,
    pub id_visiteur: i64,
    pub id_medecin: i64,
    pub date_visite: String,
    pub heure_arrivee: String,
    pub heure_debut_entretien: String,
    pub heure_depart: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temps_attente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temps_visite: Option<String>,
    pub rendez_vous: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_medecin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom_medecin: Option<String>,
}

impl VisitPayload {
    /// Validates form input and builds the creation payload.
    ///
    /// Wait and visit durations are derived here, in whole minutes from
    /// arrival, each clamped at zero.
    pub fn for_create(input: &VisitInput) -> Result<Self> {
        let times = input.times()?;
        let date = input.visit_date;
        Ok(VisitPayload {
            id_visite: None,
            id_visiteur: input.visitor_id,
            id_medecin: input.doctor_id,
            date_visite: format_date(date),
            heure_arrivee: datetime(date, &times.arrival),
            heure_debut_entretien: datetime(date, &times.interview_start),
            heure_depart: datetime(date, &times.departure),
            temps_attente: Some(times.wait_duration().to_string()),
            temps_visite: Some(times.visit_duration().to_string()),
            rendez_vous: flag_to_wire(input.by_appointment),
            nom_medecin: None,
            prenom_medecin: None,
        })
    }

    /// Builds the update payload for a full record.
    ///
    /// Durations are sent as the record carries them and are not recomputed.
    pub fn for_update(visit: &Visit) -> Self {
        let date = visit.visit_date;
        VisitPayload {
            id_visite: Some(visit.id),
            id_visiteur: visit.visitor_id,
            id_medecin: visit.doctor_id,
            date_visite: format_date(date),
            heure_arrivee: datetime(date, &visit.arrival_time),
            heure_debut_entretien: datetime(date, &visit.interview_start_time),
            heure_depart: datetime(date, &visit.departure_time),
            temps_attente: visit.wait_duration.map(|s| s.to_string()),
            temps_visite: visit.visit_duration.map(|s| s.to_string()),
            rendez_vous: flag_to_wire(visit.by_appointment),
            nom_medecin: visit.doctor_last_name.clone(),
            prenom_medecin: visit.doctor_first_name.clone(),
        }
    }
}

/// Request body for deleting a visit: the id travels in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletePayload {
    pub id_visite: i64,
}

/// A visit as the server sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireVisit {
    #[serde(default)]
    id_visite: Value,
    #[serde(default)]
    id: Value,
    date_visite: String,
    heure_arrivee: String,
    heure_debut_entretien: String,
    heure_depart: String,
    #[serde(default)]
    rendez_vous: Value,
    id_medecin: Value,
    id_visiteur: Value,
    #[serde(default)]
    nom_medecin: Option<String>,
    #[serde(default)]
    prenom_medecin: Option<String>,
    #[serde(default)]
    temps_attente: Option<String>,
    #[serde(default)]
    temps_visite: Option<String>,
}

impl WireVisit {
    /// Normalizes the server shape into a strict domain record.
    pub fn into_visit(self) -> Result<Visit> {
        Ok(Visit {
            id: int_field("id_visite", either_id(&self.id_visite, &self.id))?,
            visit_date: date_field("date_visite", &self.date_visite)?,
            arrival_time: WallClock::from_datetime("heure_arrivee", &self.heure_arrivee)?,
            interview_start_time: WallClock::from_datetime(
                "heure_debut_entretien",
                &self.heure_debut_entretien,
            )?,
            departure_time: WallClock::from_datetime("heure_depart", &self.heure_depart)?,
            by_appointment: coerce_flag(&self.rendez_vous),
            doctor_id: int_field("id_medecin", &self.id_medecin)?,
            visitor_id: int_field("id_visiteur", &self.id_visiteur)?,
            doctor_last_name: non_blank(self.nom_medecin),
            doctor_first_name: non_blank(self.prenom_medecin),
            wait_duration: span_field("temps_attente", self.temps_attente.as_deref())?,
            visit_duration: span_field("temps_visite", self.temps_visite.as_deref())?,
        })
    }
}

/// Decodes a list response into visits.
///
/// `null` is treated as an empty list.
pub fn decode_visits(body: Value) -> Result<Vec<Visit>> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(decode_visit).collect(),
        other => Err(Error::Decode(format!(
            "expected a list of visits, got {}",
            kind_of(&other)
        ))),
    }
}

/// Decodes a single-visit response that may be an object or a list.
///
/// A list yields its first element. `None` means the server sent nothing:
/// `null` or an empty list.
pub fn decode_single_visit(body: Value) -> Result<Option<Visit>> {
    match body {
        Value::Null => Ok(None),
        Value::Array(items) => items.into_iter().next().map(decode_visit).transpose(),
        obj @ Value::Object(_) => decode_visit(obj).map(Some),
        other => Err(Error::Decode(format!(
            "expected a visit, got {}",
            kind_of(&other)
        ))),
    }
}

fn decode_visit(value: Value) -> Result<Visit> {
    serde_json::from_value::<WireVisit>(value)
        .map_err(|e| Error::Decode(e.to_string()))?
        .into_visit()
}

/// Server reply to a create, update or delete.
///
/// The backend is loose about this shape, so every field is optional and an
/// unexpected body decodes to an empty acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Acknowledgement {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Acknowledgement::default();
        };
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(String::from);
        let id = ["id_visite", "id"]
            .iter()
            .filter_map(|key| obj.get(*key))
            .find_map(|v| int_field("id", v).ok());
        Acknowledgement {
            status: text("status"),
            message: text("message"),
            id,
        }
    }
}

/// Joins a date and a time of day with a single space.
pub fn datetime(date: NaiveDate, time: &WallClock) -> String {
    format!("{} {}", format_date(date), time)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn flag_to_wire(flag: bool) -> u8 {
    u8::from(flag)
}

/// Reads a boolean-ish server value.
///
/// `true`, non-zero numbers and strings other than `""`, `"0"` and
/// `"false"` are true. `null` and a missing field are false.
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(s.trim().to_ascii_lowercase().as_str(), "" | "0" | "false"),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads an integer sent either as a JSON number or a numeric string.
pub(crate) fn int_field(field: &'static str, value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::InvalidWireField {
        field,
        reason: format!("expected an integer, got {}", value),
    })
}

/// The specific id key when present, else the generic `id`.
pub(crate) fn either_id<'a>(specific: &'a Value, generic: &'a Value) -> &'a Value {
    if specific.is_null() {
        generic
    } else {
        specific
    }
}

/// Reads text that may arrive as a JSON number, e.g. a postal code.
pub(crate) fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads an optional float sent either as a JSON number or a numeric string.
pub(crate) fn float_field(field: &'static str, value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::InvalidWireField {
                field,
                reason: format!("expected a number, got {}", value),
            }),
        _ => Err(Error::InvalidWireField {
            field,
            reason: format!("expected a number, got {}", value),
        }),
    }
}

fn date_field(field: &'static str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.split([' ', 'T']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|e| Error::InvalidWireField {
        field,
        reason: format!("'{}': {}", value, e),
    })
}

fn span_field(field: &'static str, value: Option<&str>) -> Result<Option<Span>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse::<Span>().map(Some).map_err(|e| Error::InvalidWireField {
            field,
            reason: e.to_string(),
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
