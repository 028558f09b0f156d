// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

//! Tracing setup shared by the `api` and `front` binaries.
//!
//! `RUST_LOG` controls the filter (default `info,tower_http=debug`);
//! `LOG_FORMAT=json` switches from human-readable output to JSON lines.

use tracing_subscriber::EnvFilter;

use crate::config::env_or_default;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Install the global tracing subscriber. Call once, before serving.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if env_or_default("LOG_FORMAT", "pretty") == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
