// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_snapshot_repository::HttpSnapshotRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, show_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpSnapshotRepository::new(config.source.snapshot_url));

    // Create service (application layer)
    let dashboard_service = DashboardService::new(repository);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(show_dashboard))
        .route("/healthz", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    println!("Starting ecommerce-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
