// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::ApiConfig;

/// Identity and status information returned by the API root.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    /// Constant service identifier.
    pub service: String,
    /// Current Unix epoch seconds at response time.
    pub timestamp: i64,
    pub app_name: String,
    pub environment: String,
    /// Whether a secret token is configured. The token's value is never
    /// included in any response.
    pub secret_configured: bool,
}

/// API root endpoint handler.
///
/// Reads configuration from the environment on every request (no caching)
/// and reports it alongside the current wall-clock time. Never fails.
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Service identity and status", body = ServiceInfo)
    )
)]
pub async fn service_info() -> Json<ServiceInfo> {
    let config = ApiConfig::from_env();

    Json(ServiceInfo {
        service: "api".to_string(),
        timestamp: Utc::now().timestamp(),
        app_name: config.app_name,
        environment: config.environment,
        secret_configured: config.secret_configured,
    })
}
