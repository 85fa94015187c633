// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;

use visite_core::visit::{
    parse_visit_date, ARRIVAL_FIELD, DEPARTURE_FIELD, INTERVIEW_START_FIELD,
};
use visite_core::{Visit, VisitInput, WallClock};

use crate::cli::OutputFormat;
use crate::display::{format_visit_details, format_visit_line};
use crate::error::{Error, Result};
use crate::session::KeyValueStore;
use crate::sync::{Transport, VisitClient};

use super::{render_list, to_json};

/// Arguments of `visite new`.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub doctor: i64,
    pub arrival: String,
    pub start: String,
    pub departure: String,
    pub date: Option<String>,
    pub visitor: Option<i64>,
    pub appointment: bool,
}

/// Arguments of `visite edit`. `None` leaves the field as stored.
#[derive(Debug, Clone, Default)]
pub struct VisitChanges {
    pub arrival: Option<String>,
    pub start: Option<String>,
    pub departure: Option<String>,
    pub date: Option<String>,
    pub appointment: Option<bool>,
    pub doctor: Option<i64>,
}

/// Changes after validation.
struct ParsedChanges {
    arrival: Option<WallClock>,
    start: Option<WallClock>,
    departure: Option<WallClock>,
    date: Option<NaiveDate>,
    appointment: Option<bool>,
    doctor: Option<i64>,
}

impl VisitChanges {
    fn parse(&self) -> Result<ParsedChanges> {
        let time = |field: &'static str, value: &Option<String>| -> Result<Option<WallClock>> {
            value
                .as_deref()
                .map(|v| WallClock::parse(field, v))
                .transpose()
                .map_err(Error::from)
        };
        Ok(ParsedChanges {
            arrival: time(ARRIVAL_FIELD, &self.arrival)?,
            start: time(INTERVIEW_START_FIELD, &self.start)?,
            departure: time(DEPARTURE_FIELD, &self.departure)?,
            date: self.date.as_deref().map(parse_visit_date).transpose()?,
            appointment: self.appointment,
            doctor: self.doctor,
        })
    }
}

impl ParsedChanges {
    fn is_empty(&self) -> bool {
        self.arrival.is_none()
            && self.start.is_none()
            && self.departure.is_none()
            && self.date.is_none()
            && self.appointment.is_none()
            && self.doctor.is_none()
    }

    fn apply(self, visit: &mut Visit) {
        if let Some(t) = self.arrival {
            visit.arrival_time = t;
        }
        if let Some(t) = self.start {
            visit.interview_start_time = t;
        }
        if let Some(t) = self.departure {
            visit.departure_time = t;
        }
        if let Some(d) = self.date {
            visit.visit_date = d;
        }
        if let Some(a) = self.appointment {
            visit.by_appointment = a;
        }
        if let Some(id) = self.doctor.filter(|id| *id != visit.doctor_id) {
            // The cached names belong to the previous doctor.
            visit.doctor_id = id;
            visit.doctor_last_name = None;
            visit.doctor_first_name = None;
        }
    }
}

pub async fn list<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    format: OutputFormat,
) -> Result<String> {
    let visits = client.list_visits().await?;
    render_list(&visits, format, "No visits.", format_visit_line)
}

pub async fn show<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    id: i64,
    format: OutputFormat,
) -> Result<String> {
    let visit = client.get_visit(id).await?;
    match format {
        OutputFormat::Json => to_json(&visit),
        OutputFormat::Text => Ok(format_visit_details(&visit).join("\n")),
    }
}

/// Record a visit. `today` is used when no date is given.
pub async fn new<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    args: NewVisit,
    today: NaiveDate,
) -> Result<String> {
    let visit_date = match args.date.as_deref() {
        Some(d) => parse_visit_date(d)?,
        None => today,
    };
    let visitor_id = match args.visitor {
        Some(id) => id,
        None => client
            .session()
            .current_user()?
            .map(|user| user.id)
            .ok_or_else(|| Error::Auth("no stored user; pass --visitor".to_string()))?,
    };

    let input = VisitInput {
        visitor_id,
        doctor_id: args.doctor,
        visit_date,
        arrival_time: Some(args.arrival),
        interview_start_time: Some(args.start),
        departure_time: Some(args.departure),
        by_appointment: args.appointment,
    };
    let ack = client.create_visit(&input).await?;
    Ok(match ack.id {
        Some(id) => format!("Created visit #{}", id),
        None => "Visit created.".to_string(),
    })
}

/// Fetch a visit, apply the changes and send it back.
///
/// Changes are validated before anything is fetched. Durations are left as
/// the server stored them.
pub async fn edit<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    id: i64,
    changes: VisitChanges,
) -> Result<String> {
    let changes = changes.parse()?;
    if changes.is_empty() {
        return Ok("Nothing to change.".to_string());
    }

    let mut visit = client.get_visit(id).await?;
    changes.apply(&mut visit);
    if !visit.times().is_chronological() {
        tracing::warn!("visit #{} times out of order after edit", id);
    }
    client.update_visit(&visit).await?;
    Ok(format!("Updated visit #{}", id))
}

pub async fn delete<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    id: i64,
) -> Result<String> {
    client.delete_visit(id).await?;
    Ok(format!("Deleted visit #{}", id))
}

#[cfg(test)]
#[path = "visit_tests.rs"]
mod tests;
