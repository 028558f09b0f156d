// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

//! API health probe and its three-way classification.
//!
//! One outbound GET per front-page render, bounded by [`PROBE_TIMEOUT`],
//! no retries. The outcome is a display classification, never a fault of
//! the front route itself.

use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Upper bound on the outbound health call. A downstream outage must not
/// stall the front page beyond this.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Why the API was classified as down. The Display output is the
/// French-language label embedded in the rendered page.
#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    /// Timeout, connection refusal, DNS failure, or any other
    /// transport-level fault.
    #[error("Erreur: {0}")]
    Transport(String),

    /// An HTTP response arrived, but with a non-200 status.
    #[error("KO (HTTP {0})")]
    UnexpectedStatus(u16),
}

/// Result of one health probe, computed fresh per request and discarded
/// after rendering.
#[derive(Debug)]
pub enum ApiHealth {
    Up,
    Down(HealthCheckError),
}

impl ApiHealth {
    /// Status label shown on the page.
    pub fn label(&self) -> String {
        match self {
            ApiHealth::Up => "OK".to_string(),
            ApiHealth::Down(err) => err.to_string(),
        }
    }

    /// CSS class for the status box. `ok` only for the literal `OK` label.
    pub fn css_class(&self) -> &'static str {
        match self {
            ApiHealth::Up => "ok",
            ApiHealth::Down(_) => "ko",
        }
    }
}

/// Issue a single GET against the API health URL and classify the outcome.
///
/// The client's timeout bounds the call; a probe that cannot complete in
/// time comes back as `Transport`, not as a panic or a hung request.
pub async fn check_health(client: &Client, health_url: &str) -> ApiHealth {
    match client.get(health_url).send().await {
        Ok(response) if response.status() == StatusCode::OK => ApiHealth::Up,
        Ok(response) => ApiHealth::Down(HealthCheckError::UnexpectedStatus(
            response.status().as_u16(),
        )),
        Err(e) => ApiHealth::Down(HealthCheckError::Transport(e.to_string())),
    }
}
