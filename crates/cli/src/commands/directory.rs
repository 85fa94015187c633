// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use visite_core::Position;

use crate::cli::OutputFormat;
use crate::display::{format_cabinet_line, format_doctor_line};
use crate::error::Result;
use crate::session::KeyValueStore;
use crate::sync::{Transport, VisitClient};

use super::render_list;

pub async fn cabinets<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    lat: Option<f64>,
    lon: Option<f64>,
    format: OutputFormat,
) -> Result<String> {
    let position = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Position::new(lat, lon).ok_or_else(|| {
            visite_core::Error::InvalidPosition(format!("{}, {}", lat, lon))
        })?),
        _ => None,
    };
    let cabinets = client.list_cabinets(position).await?;
    render_list(&cabinets, format, "No cabinets found.", format_cabinet_line)
}

pub async fn doctors<T: Transport, S: KeyValueStore>(
    client: &VisitClient<T, S>,
    format: OutputFormat,
) -> Result<String> {
    let doctors = client.list_doctors().await?;
    render_list(&doctors, format, "No doctors found.", format_doctor_line)
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
