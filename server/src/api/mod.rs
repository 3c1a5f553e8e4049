//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`dishes`] - dish management endpoints
//! - [`orders`] - order management endpoints
//!
//! Requests flow through a fixed-order validation chain before any
//! terminal handler touches a collection; the first failing check halts
//! the chain with an [`AppError`](crate::utils::AppError) that the HTTP
//! layer renders as the standard error body.

pub mod dishes;
pub mod health;
pub mod orders;

use axum::{Router, http::Uri};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;
use crate::utils::AppError;

/// Assemble the full application router
pub fn app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(dishes::router())
        .merge(orders::router())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Terminal handler for unmatched paths
async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Not found: {}", uri.path()))
}
