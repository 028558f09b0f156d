// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod index;
pub mod probe;
pub mod template;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::tests::{clear_vars, env_guard};
    use crate::config::{API_BASE_URL_ENV, API_PUBLIC_URL_ENV, FRONT_VERSION_ENV};

    async fn spawn_api(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn render_front() -> (StatusCode, String) {
        let app = router(AppState::new());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body_bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn front_page_shows_ok_when_api_healthy() {
        let _guard = env_guard();
        let api = spawn_api(crate::api::router()).await;
        std::env::set_var(API_BASE_URL_ENV, format!("http://{api}"));
        clear_vars(&[FRONT_VERSION_ENV, API_PUBLIC_URL_ENV]);

        let (status, body) = render_front().await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"class="api-status ok""#));
        assert!(body.contains("Statut de l'API (/health) :</strong> OK"));
        assert!(body.contains("Version : v1.0 POC"));

        clear_vars(&[API_BASE_URL_ENV]);
    }

    #[tokio::test]
    async fn front_page_shows_ko_on_non_200() {
        let _guard = env_guard();
        let api = spawn_api(Router::new().route(
            "/health",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        std::env::set_var(API_BASE_URL_ENV, format!("http://{api}"));

        let (status, body) = render_front().await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"class="api-status ko""#));
        assert!(body.contains("KO (HTTP 500)"));

        clear_vars(&[API_BASE_URL_ENV]);
    }

    #[tokio::test]
    async fn front_page_still_200_when_api_unreachable() {
        let _guard = env_guard();
        // Closed port: bind then drop.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        std::env::set_var(API_BASE_URL_ENV, format!("http://{addr}"));

        let (status, body) = render_front().await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"class="api-status ko""#));
        assert!(body.contains("Erreur: "));

        clear_vars(&[API_BASE_URL_ENV]);
    }
}
