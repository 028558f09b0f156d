// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use reqwest::Client;

use crate::front::probe::PROBE_TIMEOUT;

/// Shared state for the front service.
///
/// Holds the outbound HTTP client used for the API health probe. The client
/// is built once at startup with the probe timeout; configuration values are
/// still read from the environment per request.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .timeout(PROBE_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
