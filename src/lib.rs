// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

//! DataPress POC - API + Front Services
//!
//! Two stateless HTTP services sharing this library:
//!
//! - the `api` binary serves identity/status JSON and a liveness probe,
//! - the `front` binary serves an HTML status page that probes the API's
//!   `/health` route on every render.
//!
//! ## Modules
//!
//! - `api` - API service handlers (Axum)
//! - `front` - front service handler, health probe, page template
//! - `config` - environment-driven configuration with explicit defaults
//! - `logging` - tracing setup shared by both binaries

pub mod api;
pub mod config;
pub mod front;
pub mod logging;
pub mod state;
