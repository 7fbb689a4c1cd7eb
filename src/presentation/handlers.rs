// HTTP request handlers
use crate::domain::fallback::fallback_snapshot;
use crate::presentation::app_state::AppState;
use crate::presentation::render::page::dashboard_page;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve the dashboard page: load the snapshot (total, falls back on source
/// failure), then render. If building the page itself fails, rebuild from
/// the fallback dataset as a last resort before giving up with a 500.
pub async fn show_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.dashboard_service.load().await;

    match dashboard_page(&snapshot) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to build dashboard page: {}", e);
            match dashboard_page(&fallback_snapshot()) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    tracing::error!("fallback page build failed: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
    }
}
