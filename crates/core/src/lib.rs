// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! visite-core: Shared library for the visite client
//!
//! This crate provides the domain types, time accounting and wire codec used
//! by the `visite` client. It performs no I/O: everything here is pure
//! conversion and validation, so it can be exercised without a server.

pub mod cabinet;
pub mod clock;
pub mod error;
pub mod user;
pub mod visit;
pub mod wire;

pub use cabinet::{Cabinet, Doctor, Position};
pub use clock::{Span, WallClock};
pub use error::{Error, Result};
pub use user::{LoginRequest, LoginResponse, Session, User};
pub use visit::{Visit, VisitInput, VisitTimes};
pub use wire::{Acknowledgement, DeletePayload, VisitPayload};
