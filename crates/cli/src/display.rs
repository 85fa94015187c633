// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use visite_core::{Cabinet, Doctor, User, Visit};

/// One-line summary of a visit.
///
/// Output format:
/// ```text
/// #41  2025-03-06  14:00:00-14:45:00  Claire Martin  (appointment)
/// ```
pub fn format_visit_line(visit: &Visit) -> String {
    let doctor = visit
        .doctor_name()
        .unwrap_or_else(|| format!("doctor #{}", visit.doctor_id));
    let appointment = if visit.by_appointment {
        "  (appointment)"
    } else {
        ""
    };
    format!(
        "#{}  {}  {}-{}  {}{}",
        visit.id,
        visit.visit_date,
        visit.arrival_time,
        visit.departure_time,
        doctor,
        appointment
    )
}

/// Full details of a visit.
///
/// Durations come from the record when the server sent them, and are derived
/// from the three times otherwise.
pub fn format_visit_details(visit: &Visit) -> Vec<String> {
    let times = visit.times();
    let wait = visit.wait_duration.unwrap_or_else(|| times.wait_duration());
    let total = visit
        .visit_duration
        .unwrap_or_else(|| times.visit_duration());
    let doctor = match visit.doctor_name() {
        Some(name) => format!("{} (#{})", name, visit.doctor_id),
        None => format!("#{}", visit.doctor_id),
    };

    vec![
        format!("Visit #{}", visit.id),
        format!("  Date:            {}", visit.visit_date),
        format!("  Doctor:          {}", doctor),
        format!("  Visitor:         #{}", visit.visitor_id),
        format!("  By appointment:  {}", yes_no(visit.by_appointment)),
        format!("  Arrival:         {}", visit.arrival_time),
        format!("  Interview start: {}", visit.interview_start_time),
        format!("  Departure:       {}", visit.departure_time),
        format!("  Wait:            {}", wait),
        format!("  Visit duration:  {}", total),
    ]
}

/// One-line summary of a cabinet, distance first.
pub fn format_cabinet_line(cabinet: &Cabinet) -> String {
    let distance = match cabinet.distance_km {
        Some(km) => format!("{:>7.1} km", km),
        None => format!("{:>10}", "-"),
    };
    let doctors: Vec<String> = cabinet.doctors.iter().map(Doctor::display_name).collect();
    let mut line = format!("{}  #{}  {}", distance, cabinet.id, cabinet.address());
    if !doctors.is_empty() {
        line.push_str(&format!("  [{}]", doctors.join(", ")));
    }
    line
}

pub fn format_doctor_line(doctor: &Doctor) -> String {
    format!("#{}  {}", doctor.id, doctor.display_name())
}

pub fn format_user(user: &User) -> String {
    format!("{} <{}> (#{})", user.display_name(), user.email, user.id)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
