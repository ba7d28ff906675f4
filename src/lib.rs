//! svcerr Server - diagnostic HTTP service over the svcerr error model.
//!
//! Exposes the error catalog, renders any code as an error response, and
//! classifies error text received from elsewhere. Every error response
//! goes through `svcerr-http`: status line from the error's code, JSON body,
//! request-ID tagging and logging.

pub mod config;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Builds the HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/errors", get(routes::errors::catalog))
        .route("/errors/{code}", get(routes::errors::render))
        .route("/inspect", post(routes::errors::inspect))
        .fallback(routes::errors::unrouted)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn_with_state(
            state.reporting().clone(),
            svcerr_http::error_reporting_middleware,
        ))
        .with_state(state)
}
