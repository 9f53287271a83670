//! JSON endpoint routes.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// # Endpoints
///
/// - `GET /health` - Service and database status
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
