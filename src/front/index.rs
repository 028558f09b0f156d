// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use axum::{extract::State, response::Html};
use tracing::warn;

use crate::config::FrontConfig;
use crate::front::{probe, template};
use crate::state::AppState;

/// Front page handler.
///
/// Re-reads configuration, probes the API's health route once, and renders
/// the page. A failed probe is an expected condition: the route always
/// answers 200 and the page carries the failure label instead.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let config = FrontConfig::from_env();
    let health = probe::check_health(&state.http, &config.api_health_url()).await;

    if let probe::ApiHealth::Down(err) = &health {
        warn!(api_health_url = %config.api_health_url(), %err, "API health probe failed");
    }

    Html(template::render_index(&config, &health))
}
