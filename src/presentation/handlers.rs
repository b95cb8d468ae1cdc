// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page
pub async fn dashboard_page(
    Query(query): Query<TabQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let page = state
        .dashboard_service
        .render_page(query.tab.as_deref())
        .into_string();

    match html_response(page, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Effective dashboard content as JSON
pub async fn dashboard_content(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard_service.dashboard().clone())
}
