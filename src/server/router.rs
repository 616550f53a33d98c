use crate::server::auth::api_key_auth;
use crate::server::request_logger::log_requests;
use crate::server::{handlers, ApiError, AppState};

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use log::error;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Routes that require the API key. Documents of any length are accepted.
    let protected = Router::new()
        .route("/keywords", post(handlers::keywords))
        .layer(DefaultBodyLimit::disable())
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            api_key_auth,
        ));

    // Public routes (no auth)
    let public = Router::new()
        .route("/health", get(handlers::health))
        .route("/health/*rest", get(handlers::health));

    public
        .merge(protected)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Request handler panicked: {}", detail);

    ApiError::Internal("Internal Server Error".to_string()).into_response()
}
