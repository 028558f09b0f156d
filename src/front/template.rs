// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DataPress

//! Status page rendering.
//!
//! The page is a single self-contained HTML document (UTF-8, French
//! labels). All interpolated values are HTML-escaped; the probe's error
//! message in particular carries arbitrary transport-layer text.

use crate::config::FrontConfig;
use crate::front::probe::ApiHealth;

const PAGE_STYLE: &str = "\
            body {
                font-family: Arial, sans-serif;
                margin: 40px;
                background-color: #f5f5f5;
            }
            .container {
                background-color: #ffffff;
                padding: 20px 30px;
                border-radius: 8px;
                max-width: 600px;
                box-shadow: 0 0 8px rgba(0,0,0,0.1);
            }
            h1 {
                color: #1e88e5;
            }
            .version {
                font-weight: bold;
                color: #555;
            }
            .api-status {
                margin-top: 20px;
                padding: 10px;
                border-radius: 4px;
            }
            .ok {
                background-color: #c8e6c9;
                color: #2e7d32;
            }
            .ko {
                background-color: #ffcdd2;
                color: #b71c1c;
            }
            code {
                background: #eee;
                padding: 2px 4px;
                border-radius: 3px;
            }";

/// Render the front status page.
pub fn render_index(config: &FrontConfig, health: &ApiHealth) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <title>DataPress – POC</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="container">
        <h1>DataPress – POC</h1>
        <p class="version">Version : {front_version}</p>
        <p>Ce front est connecté à l'API DataPress.</p>

        <h2>API</h2>
        <p>URL de base de l'API (utilisée par le front, interne au réseau Docker/Kubernetes) :</p>
        <p><code>{api_base_url}</code></p>

        <div class="api-status {status_class}">
            <strong>Statut de l'API (/health) :</strong> {status_label}
        </div>

        <p style="margin-top:20px;">
            Vous pouvez aussi tester directement l'API depuis votre navigateur :<br>
            <code>{api_public_url}/</code>
        </p>
    </div>
</body>
</html>
"#,
        style = PAGE_STYLE,
        front_version = escape(&config.front_version),
        api_base_url = escape(&config.api_base_url),
        api_public_url = escape(&config.api_public_url),
        status_class = health.css_class(),
        status_label = escape(&health.label()),
    )
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
