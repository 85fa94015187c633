// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization with the visits API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Client    │────►│  Transport  │────►│  Visits API │
//! │ (VisitClient)│◄────│   (trait)   │◄────│   (HTTP)    │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │ SessionStore │  (token + user)
//! └──────────────┘
//! ```
//!
//! # Features
//!
//! - Bearer-token authentication from the stored session
//! - HTTP status mapping into [`crate::Error`]
//! - Injectable transport trait for testing

mod client;
mod transport;

pub use client::VisitClient;
pub use transport::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError,
    TransportResult,
};

#[cfg(test)]
pub(crate) mod test_helpers;


#[cfg(test)]
pub(crate) mod transport_tests;
