// Presentation layer - HTTP routes and HTML components
pub mod app_state;
pub mod components;
pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_content, dashboard_page, health_check};

pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_content))
        .route("/healthz", get(health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
