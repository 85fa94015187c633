// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the visits API.
//!
//! Provides a high-level interface for:
//! - Logging in and out
//! - Listing, reading, creating, updating and deleting visits
//! - Looking up cabinets and doctors
//!
//! Every call except [`VisitClient::login`] needs a stored session token. A
//! missing token fails with [`Error::Auth`] before the transport is touched.

use serde::Serialize;
use serde_json::Value;

use visite_core::cabinet::{decode_cabinets, decode_doctors};
use visite_core::wire::{decode_single_visit, decode_visits};
use visite_core::{
    Acknowledgement, Cabinet, DeletePayload, Doctor, LoginRequest, LoginResponse, Position,
    Session, Visit, VisitInput, VisitPayload,
};

use super::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
use crate::error::{Error, Result};
use crate::session::{FileStore, KeyValueStore, SessionStore};

const AUTH_PATH: &str = "/ApiAuth.php";
const VISITS_PATH: &str = "/ApiVisite.php";
const CABINETS_PATH: &str = "/ApiCabinet.php";
const DOCTORS_PATH: &str = "/ApiMedecin.php";

/// Visits API client.
pub struct VisitClient<T: Transport = ReqwestTransport, S: KeyValueStore = FileStore> {
    /// Transport layer.
    transport: T,
    /// Stored token and user.
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> VisitClient<T, S> {
    pub fn new(transport: T, session: SessionStore<S>) -> Self {
        VisitClient { transport, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Authenticate and persist the resulting session.
    ///
    /// Blank credentials are rejected without a request. The reply must carry
    /// both a token and a user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let credentials = LoginRequest::new(email, password)?;
        let request = HttpRequest::new(Method::Post, AUTH_PATH).with_body(to_body(&credentials)?);

        let response = self.send(request, "login failed").await?;
        let reply: LoginResponse = serde_json::from_str(&response.body)
            .map_err(|e| Error::InvalidResponse(format!("login reply: {}", e)))?;
        let session = reply
            .into_session()
            .map_err(invalid_response)?
            .ok_or_else(|| Error::Auth("invalid credentials".to_string()))?;

        self.session.set_session(&session.token, &session.user)?;
        tracing::info!("logged in as user {}", session.user.id);
        Ok(session)
    }

    /// Forget the stored session. No request is made.
    pub fn logout(&self) -> Result<()> {
        self.session.clear_session()
    }

    pub async fn list_visits(&self) -> Result<Vec<Visit>> {
        let body = self.get_json(VISITS_PATH.to_string()).await?;
        decode_visits(body).map_err(invalid_response)
    }

    /// Fetch one visit. The server may wrap it in a one-element list.
    pub async fn get_visit(&self, id: i64) -> Result<Visit> {
        let body = self.get_json(format!("{}?id={}", VISITS_PATH, id)).await?;
        decode_single_visit(body)
            .map_err(invalid_response)?
            .ok_or(Error::VisitNotFound(id))
    }

    /// Validate form input, derive the durations and create the visit.
    pub async fn create_visit(&self, input: &VisitInput) -> Result<Acknowledgement> {
        let times = input.times()?;
        if !times.is_chronological() {
            tracing::warn!(
                "visit times out of order: arrival {}, start {}, departure {}",
                times.arrival,
                times.interview_start,
                times.departure
            );
        }
        let payload = VisitPayload::for_create(input)?;
        self.mutate(Method::Post, to_body(&payload)?).await
    }

    /// Send a full record back. Durations go out as the record carries them.
    pub async fn update_visit(&self, visit: &Visit) -> Result<Acknowledgement> {
        let payload = VisitPayload::for_update(visit);
        self.mutate(Method::Put, to_body(&payload)?).await
    }

    pub async fn delete_visit(&self, id: i64) -> Result<Acknowledgement> {
        let payload = DeletePayload { id_visite: id };
        self.mutate(Method::Delete, to_body(&payload)?).await
    }

    /// Cabinets nearest first. Without a position the server decides what
    /// distance, if any, to report.
    pub async fn list_cabinets(&self, position: Option<Position>) -> Result<Vec<Cabinet>> {
        let path = match position {
            Some(p) => format!("{}{}", CABINETS_PATH, p.query()),
            None => CABINETS_PATH.to_string(),
        };
        let body = self.get_json(path).await?;
        decode_cabinets(body).map_err(invalid_response)
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        let body = self.get_json(DOCTORS_PATH.to_string()).await?;
        decode_doctors(body).map_err(invalid_response)
    }

    fn bearer(&self) -> Result<String> {
        self.session
            .token()?
            .ok_or_else(|| Error::Auth("no session token".to_string()))
    }

    async fn get_json(&self, path: String) -> Result<Value> {
        let request = HttpRequest::new(Method::Get, path).with_bearer(self.bearer()?);
        let response = self.send(request, "request failed").await?;
        parse_body(&response.body)
    }

    async fn mutate(&self, method: Method, body: Value) -> Result<Acknowledgement> {
        let request = HttpRequest::new(method, VISITS_PATH)
            .with_bearer(self.bearer()?)
            .with_body(body);
        let response = self.send(request, "request failed").await?;
        let value = serde_json::from_str(&response.body).unwrap_or(Value::Null);
        Ok(Acknowledgement::from_value(&value))
    }

    /// Execute a request and turn non-success statuses into errors.
    async fn send(&self, request: HttpRequest, fallback: &str) -> Result<HttpResponse> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!("{} {}", method, path);

        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = server_message(&response.body).unwrap_or_else(|| fallback.to_string());
        tracing::warn!("{} {} returned {}: {}", method, path, response.status, message);
        if response.status == 401 {
            return Err(Error::Auth(message));
        }
        Err(Error::Api {
            status: response.status,
            message,
        })
    }
}

/// The `message` field of a JSON object body, if any.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(String::from)
}

/// Parse a success body. An empty body reads as `null`.
fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| Error::InvalidResponse(e.to_string()))
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| Error::Encode(e.to_string()))
}

fn invalid_response(e: visite_core::Error) -> Error {
    Error::InvalidResponse(e.to_string())
}
