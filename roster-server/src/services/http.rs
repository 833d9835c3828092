//! HTTP service
//!
//! Router assembly and request-level middleware.

use axum::{Router, middleware};
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::session::require_session;

/// Access log: one line per request with status and latency
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        "{} {} {} {}ms",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );

    response
}

/// Assemble the stateless router from the per-resource routers
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::members::router())
        .merge(crate::api::photos::router())
}

/// Attach state and the middleware stack, yielding the servable app.
///
/// `require_session` runs inside the router so it sees the matched path;
/// CORS, compression, and the access log wrap the whole service.
pub fn build_service(state: ServerState) -> Router {
    build_app()
        .layer(middleware::from_fn(require_session))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
