// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! by both services. Configuration is read from the environment; the API
//! and front services deliberately re-read their variables on every request
//! (no caching).
//!
//! ## Environment Variables
//!
//! | Variable | Service | Description | Default |
//! |----------|---------|-------------|---------|
//! | `HOST` | both | Server bind address | `0.0.0.0` |
//! | `PORT` | both | Server bind port | `8000` |
//! | `APP_NAME` | api | Application display name | `DataPress API` |
//! | `APP_ENV` | api | Environment label | `development` |
//! | `API_SECRET_TOKEN` | api | Secret token; only its *presence* is ever reported | unset |
//! | `FRONT_VERSION` | front | Front display version | `v1.0 POC` |
//! | `API_BASE_URL` | front | API base URL for the internal health probe | `http://api:8000` |
//! | `API_PUBLIC_URL` | front | API URL shown to the user, never called | `http://localhost:8000` |
//! | `LOG_FORMAT` | both | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | both | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

/// Environment variable for the API application display name.
pub const APP_NAME_ENV: &str = "APP_NAME";

/// Environment variable for the API environment label.
pub const APP_ENV_ENV: &str = "APP_ENV";

/// Environment variable for the API secret token.
///
/// The value itself must never appear in any response body or log line;
/// only a boolean "is it configured" is surfaced.
pub const API_SECRET_TOKEN_ENV: &str = "API_SECRET_TOKEN";

/// Environment variable for the front display version.
pub const FRONT_VERSION_ENV: &str = "FRONT_VERSION";

/// Environment variable for the API base URL used by the front's health probe
/// (internal to the Docker/Kubernetes network).
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Environment variable for the API URL displayed to the user (never called).
pub const API_PUBLIC_URL_ENV: &str = "API_PUBLIC_URL";

pub const DEFAULT_APP_NAME: &str = "DataPress API";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_FRONT_VERSION: &str = "v1.0 POC";
pub const DEFAULT_API_BASE_URL: &str = "http://api:8000";
pub const DEFAULT_API_PUBLIC_URL: &str = "http://localhost:8000";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// API service configuration, read fresh from the environment per request.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub app_name: String,
    pub environment: String,
    /// Presence flag only; the token's value is dropped immediately.
    pub secret_configured: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            app_name: env_or_default(APP_NAME_ENV, DEFAULT_APP_NAME),
            environment: env_or_default(APP_ENV_ENV, DEFAULT_APP_ENV),
            secret_configured: env_flag(API_SECRET_TOKEN_ENV),
        }
    }
}

/// Front service configuration, read fresh from the environment per request.
#[derive(Debug, Clone)]
pub struct FrontConfig {
    pub front_version: String,
    pub api_base_url: String,
    pub api_public_url: String,
}

impl FrontConfig {
    pub fn from_env() -> Self {
        Self {
            front_version: env_or_default(FRONT_VERSION_ENV, DEFAULT_FRONT_VERSION),
            api_base_url: env_or_default(API_BASE_URL_ENV, DEFAULT_API_BASE_URL),
            api_public_url: env_or_default(API_PUBLIC_URL_ENV, DEFAULT_API_PUBLIC_URL),
        }
    }

    /// Health probe URL: base URL with any trailing slash stripped, plus `/health`.
    pub fn api_health_url(&self) -> String {
        format!("{}/health", self.api_base_url.trim_end_matches('/'))
    }
}

/// Listener configuration shared by both binaries.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `HOST`/`PORT` at startup, falling back to `0.0.0.0:8000`.
    pub fn from_env() -> Self {
        let host = env_or_default("HOST", DEFAULT_HOST);
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        Self { addr }
    }
}

/// Read an environment variable, substituting `default` only when unset.
///
/// Set-but-empty values are returned verbatim: the API contract echoes
/// whatever the deployment configured.
pub fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// True iff the variable is set to a non-empty value.
pub fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| !v.is_empty()).unwrap_or(false)
}
