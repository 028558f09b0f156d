// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod health;
pub mod root;

use crate::api::health::HealthResponse;
use crate::api::root::ServiceInfo;

pub fn router() -> Router {
    Router::new()
        .route("/", get(root::service_info))
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(root::service_info, health::health),
    components(schemas(ServiceInfo, HealthResponse)),
    tags(
        (name = "Service", description = "Service identity and status"),
        (name = "Health", description = "Liveness probing")
    )
)]
struct ApiDoc;
