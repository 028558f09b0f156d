// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response for liveness/readiness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint handler.
///
/// Always returns 200 if the process is running; checks no dependencies.
/// Kubernetes treats failure-to-respond or non-200 as an instruction to
/// restart the instance or pull it from rotation, so this must stay cheap
/// and unconditional.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
