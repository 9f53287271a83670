//! Top-level router configuration combining the catalog pages and JSON endpoints.
//!
//! # Route Structure
//!
//! - `GET  /`              - Redirect to the instructor list
//! - `/{kind}/*`           - List/detail/create/update/delete pages for each entity kind
//! - `GET  /health`        - Health check (JSON)
//! - `/static/*`           - Static assets
//!
//! Unknown paths render the 404 page.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes, state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] with trailing slashes
/// trimmed before routing, so `/course/` and `/course` are the same page.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
