//! HTTP routes for booking endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{change_booking_room, create_booking, get_booking, BookingHandlers};

/// Creates the booking router with all endpoints.
///
/// Mounted at `/booking`; every route needs an authenticated caller.
pub fn booking_routes(handlers: BookingHandlers) -> Router {
    Router::new()
        .route("/", get(get_booking).post(create_booking))
        .route("/:bookingId", put(change_booking_room))
        .with_state(handlers)
}
