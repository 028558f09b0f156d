// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use datapress_poc::{config::ServerConfig, front, logging, state::AppState};

#[tokio::main]
async fn main() {
    logging::init();

    let server = ServerConfig::from_env();
    let app = front::router(AppState::new());

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .expect("Failed to bind front listener");

    tracing::info!("DataPress front listening on http://{}", server.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Front server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
