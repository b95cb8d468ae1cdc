// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{load_dashboard_config, DEFAULT_CONFIG_PATH};
use crate::presentation::app_state::AppState;
use crate::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config(DEFAULT_CONFIG_PATH)?;
    let server = config.server.clone();

    // Build domain content (fails fast on invalid urls or tab layout)
    let dashboard = config.into_dashboard()?;
    tracing::info!(
        "Dashboard {:?}: {} stats, {} tabs, {} embeds, {} announcements",
        dashboard.title,
        dashboard.stats.len(),
        dashboard.tabs.tabs().len(),
        dashboard.embed_count(),
        dashboard.announcements.count()
    );

    // Create services (application layer)
    let dashboard_service = DashboardService::new(dashboard);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    // Page compression is handled in the response builder, static assets are
    // served as-is
    let router = router(state, &server.static_dir);

    // Start server
    let addr: SocketAddr = server.bind.parse()?;
    tracing::info!("Starting readathon-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
