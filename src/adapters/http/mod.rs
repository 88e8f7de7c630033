//! HTTP adapters - REST API implementations.
//!
//! `api_router` assembles the full application: the public health check,
//! the authenticated booking routes, and the tracing, request-id and
//! timeout layers wrapped around them.

pub mod booking;
pub mod middleware;

use std::time::Duration;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub use booking::{booking_routes, BookingHandlers};
pub use middleware::{auth_middleware, AuthState};

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Builds the application router.
pub fn api_router(handlers: BookingHandlers, auth: AuthState, request_timeout: Duration) -> Router {
    let bookings = booking_routes(handlers).layer(from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/booking", bookings)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
