//! HTTP adapter for booking endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BookingIdResponse, BookingResponse, ErrorResponse, RoomIdInput, RoomResponse,
    RoomSelectionRequest,
};
pub use handlers::BookingHandlers;
pub use routes::booking_routes;
