//! HTTP handlers for booking endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::booking::{
    ChangeBookingRoomCommand, ChangeBookingRoomHandler, CreateBookingCommand,
    CreateBookingHandler, GetBookingHandler, GetBookingQuery,
};
use crate::domain::booking::BookingError;
use crate::domain::foundation::BookingId;

use super::dto::{BookingIdResponse, BookingResponse, ErrorResponse, RoomSelectionRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BookingHandlers {
    create_handler: Arc<CreateBookingHandler>,
    get_handler: Arc<GetBookingHandler>,
    change_room_handler: Arc<ChangeBookingRoomHandler>,
}

impl BookingHandlers {
    pub fn new(
        create_handler: Arc<CreateBookingHandler>,
        get_handler: Arc<GetBookingHandler>,
        change_room_handler: Arc<ChangeBookingRoomHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            change_room_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /booking - Book a room
pub async fn create_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<RoomSelectionRequest>>,
) -> Response {
    let Json(req) = body.unwrap_or_default();

    let cmd = CreateBookingCommand {
        user_id: user.id,
        room_id: req.room_id(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response = BookingIdResponse::from(result.booking_id);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

/// GET /booking - The caller's booking with its room
pub async fn get_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetBookingQuery { user_id: user.id };

    match handlers.get_handler.handle(query).await {
        Ok(view) => {
            let response: BookingResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

/// PUT /booking/:bookingId - Move the caller's booking to another room
pub async fn change_booking_room(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    Path(booking_id): Path<String>,
    body: Option<Json<RoomSelectionRequest>>,
) -> Response {
    let booking_id = match booking_id.parse::<BookingId>() {
        Ok(id) => id,
        Err(e) => return handle_booking_error(e.into()),
    };
    let Json(req) = body.unwrap_or_default();

    let cmd = ChangeBookingRoomCommand {
        user_id: user.id,
        booking_id,
        room_id: req.room_id(),
    };

    match handlers.change_room_handler.handle(cmd).await {
        Ok(result) => {
            let response = BookingIdResponse::from(result.booking_id);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn booking_error_status(error: &BookingError) -> StatusCode {
    match error {
        BookingError::ValidationFailed { .. }
        | BookingError::NotEligible(_)
        | BookingError::NoVacancies(_) => StatusCode::FORBIDDEN,
        BookingError::RoomNotFound(_)
        | BookingError::BookingNotFound(_)
        | BookingError::NoBookingToChange(_) => StatusCode::NOT_FOUND,
        BookingError::NotBookingOwner => StatusCode::UNAUTHORIZED,
        BookingError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_booking_error(error: BookingError) -> Response {
    let status = booking_error_status(&error);

    if error.is_infrastructure() {
        // Details stay in the logs
        tracing::error!(error = %error, "Booking request failed");
        let body = ErrorResponse::internal("Internal server error");
        return (status, Json(body)).into_response();
    }

    tracing::debug!(code = %error.code(), "Booking rejected");
    let mut body = ErrorResponse::new(error.code().to_string(), error.message());
    if let BookingError::NotEligible(reason) = &error {
        body = body.with_details(serde_json::json!({ "reason": reason }));
    }

    (status, Json(body)).into_response()
}
