//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the contact-submission API next to the static
//! marketing site. API routes live under `/api`; everything else falls
//! through to the website directory, which also carries the wasm bundle
//! under `/pkg`.

pub mod submissions;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Endpoints printed in the startup banner, in route order.
pub const ENDPOINTS: [(&str, &str, &str); 4] = [
    ("POST", "/api/submit-contact-form", "Submit form data"),
    ("GET", "/api/get-submissions", "View all submissions"),
    ("GET", "/api/download-submissions", "Download as JSON"),
    ("POST", "/api/clear-submissions", "Clear all submissions"),
];

/// API routes + static website fallback.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let website_service = ServeDir::new(website_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/api/submit-contact-form", post(submissions::submit_contact_form))
        .route("/api/get-submissions", get(submissions::get_submissions))
        .route("/api/download-submissions", get(submissions::download_submissions))
        .route("/api/clear-submissions", post(submissions::clear_submissions))
        .route("/healthz", get(healthz))
        .fallback_service(website_service)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
