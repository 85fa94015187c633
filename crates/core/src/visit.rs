// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visit records and the time accounting derived from them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::{Span, WallClock};
use crate::error::{Error, Result};

pub const ARRIVAL_FIELD: &str = "arrival time";
pub const INTERVIEW_START_FIELD: &str = "interview start time";
pub const DEPARTURE_FIELD: &str = "departure time";

/// A visit as the rest of the application sees it.
///
/// Decoded from the server by [`crate::wire::WireVisit`]; the ambiguous wire
/// encodings never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub id: i64,
    pub visit_date: NaiveDate,
    pub arrival_time: WallClock,
    pub interview_start_time: WallClock,
    pub departure_time: WallClock,
    pub by_appointment: bool,
    pub doctor_id: i64,
    pub visitor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_duration: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_duration: Option<Span>,
}

impl Visit {
    pub fn times(&self) -> VisitTimes {
        VisitTimes {
            arrival: self.arrival_time,
            interview_start: self.interview_start_time,
            departure: self.departure_time,
        }
    }

    /// "First Last" when the server joined the doctor's name in.
    pub fn doctor_name(&self) -> Option<String> {
        match (&self.doctor_first_name, &self.doctor_last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (None, Some(last)) => Some(last.clone()),
            (Some(first), None) => Some(first.clone()),
            (None, None) => None,
        }
    }
}

/// The three validated times of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitTimes {
    pub arrival: WallClock,
    pub interview_start: WallClock,
    pub departure: WallClock,
}

impl VisitTimes {
    /// Interview start minus arrival, in whole minutes, never negative.
    pub fn wait_duration(&self) -> Span {
        self.arrival.minutes_until(&self.interview_start)
    }

    /// Departure minus arrival, in whole minutes, never negative.
    ///
    /// Computed from arrival independently of [`Self::wait_duration`].
    pub fn visit_duration(&self) -> Span {
        self.arrival.minutes_until(&self.departure)
    }

    /// True when arrival <= interview start <= departure.
    pub fn is_chronological(&self) -> bool {
        self.arrival.seconds_of_day() <= self.interview_start.seconds_of_day()
            && self.interview_start.seconds_of_day() <= self.departure.seconds_of_day()
    }
}

/// Form input for a new visit, before validation.
///
/// Times are raw user text; a blank entry counts as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitInput {
    pub visitor_id: i64,
    pub doctor_id: i64,
    pub visit_date: NaiveDate,
    pub arrival_time: Option<String>,
    pub interview_start_time: Option<String>,
    pub departure_time: Option<String>,
    pub by_appointment: bool,
}

impl VisitInput {
    /// Checks that all three times are present and well-formed.
    pub fn times(&self) -> Result<VisitTimes> {
        Ok(VisitTimes {
            arrival: required_time(ARRIVAL_FIELD, self.arrival_time.as_deref())?,
            interview_start: required_time(
                INTERVIEW_START_FIELD,
                self.interview_start_time.as_deref(),
            )?,
            departure: required_time(DEPARTURE_FIELD, self.departure_time.as_deref())?,
        })
    }
}

fn required_time(field: &'static str, value: Option<&str>) -> Result<WallClock> {
    match value.map(str::trim) {
        None | Some("") => Err(Error::MissingField { field }),
        Some(v) => WallClock::parse(field, v),
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_visit_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

#[cfg(test)]
#[path = "visit_tests.rs"]
mod tests;
