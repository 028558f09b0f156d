// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use datapress_poc::{api, config::ServerConfig, logging};

#[tokio::main]
async fn main() {
    logging::init();

    let server = ServerConfig::from_env();
    let app = api::router();

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .expect("Failed to bind API listener");

    tracing::info!("DataPress API listening on http://{} (docs at /docs)", server.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("API server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
