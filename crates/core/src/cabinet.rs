// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Medical practices (cabinets) and the doctors attached to them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::wire::{either_id, float_field, int_field, text_field};

/// A doctor (médecin) a visit can be recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
}

impl Doctor {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A medical practice, with its distance from the caller when the server
/// was given a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cabinet {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub doctors: Vec<Doctor>,
}

impl Cabinet {
    pub fn address(&self) -> String {
        format!("{}, {} {}", self.street, self.postal_code, self.city)
    }
}

/// A device position used to ask the server for nearby cabinets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Builds a position, returning `None` outside valid coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Position {
            latitude,
            longitude,
        })
    }

    /// Query string for `ApiCabinet.php`, including the leading `?`.
    pub fn query(&self) -> String {
        format!("?latitude={}&longitude={}", self.latitude, self.longitude)
    }
}

/// Orders cabinets nearest first.
///
/// Cabinets without a distance go last; ties keep server order.
pub fn sort_by_proximity(cabinets: &mut [Cabinet]) {
    cabinets.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[derive(Debug, Deserialize)]
struct WireDoctor {
    #[serde(default)]
    id_medecin: Value,
    #[serde(default)]
    id: Value,
    #[serde(default)]
    nom: Value,
    #[serde(default)]
    prenom: Value,
}

impl WireDoctor {
    fn into_doctor(self) -> Result<Doctor> {
        Ok(Doctor {
            id: int_field("id_medecin", either_id(&self.id_medecin, &self.id))?,
            last_name: text_field(&self.nom).unwrap_or_default(),
            first_name: text_field(&self.prenom).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WireCabinet {
    #[serde(default)]
    id_cabinet: Value,
    #[serde(default)]
    id: Value,
    #[serde(default)]
    rue: Value,
    #[serde(default)]
    ville: Value,
    #[serde(default)]
    code_postal: Value,
    #[serde(default)]
    telephone: Value,
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    #[serde(default)]
    distance: Value,
    #[serde(default)]
    medecins: Vec<WireDoctor>,
}

impl WireCabinet {
    fn into_cabinet(self) -> Result<Cabinet> {
        Ok(Cabinet {
            id: int_field("id_cabinet", either_id(&self.id_cabinet, &self.id))?,
            street: text_field(&self.rue).unwrap_or_default(),
            city: text_field(&self.ville).unwrap_or_default(),
            postal_code: text_field(&self.code_postal).unwrap_or_default(),
            phone: text_field(&self.telephone).filter(|t| !t.trim().is_empty()),
            latitude: float_field("latitude", &self.latitude)?,
            longitude: float_field("longitude", &self.longitude)?,
            distance_km: float_field("distance", &self.distance)?,
            doctors: self
                .medecins
                .into_iter()
                .map(WireDoctor::into_doctor)
                .collect::<Result<_>>()?,
        })
    }
}

/// Decodes a cabinet list and sorts it nearest first.
pub fn decode_cabinets(body: Value) -> Result<Vec<Cabinet>> {
    let wire: Vec<WireCabinet> = decode_list(body, "cabinets")?;
    let mut cabinets = wire
        .into_iter()
        .map(WireCabinet::into_cabinet)
        .collect::<Result<Vec<_>>>()?;
    sort_by_proximity(&mut cabinets);
    Ok(cabinets)
}

/// Decodes a doctor list, keeping server order.
pub fn decode_doctors(body: Value) -> Result<Vec<Doctor>> {
    let wire: Vec<WireDoctor> = decode_list(body, "doctors")?;
    wire.into_iter().map(WireDoctor::into_doctor).collect()
}

fn decode_list<T: serde::de::DeserializeOwned>(body: Value, what: &str) -> Result<Vec<T>> {
    match body {
        Value::Null => Ok(Vec::new()),
        list @ Value::Array(_) => {
            serde_json::from_value(list).map_err(|e| Error::Decode(format!("{}: {}", what, e)))
        }
        _ => Err(Error::Decode(format!("expected a list of {}", what))),
    }
}

#[cfg(test)]
#[path = "cabinet_tests.rs"]
mod tests;
