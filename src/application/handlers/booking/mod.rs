//! Booking command and query handlers.

mod change_booking_room;
mod create_booking;
mod get_booking;

pub use change_booking_room::{
    ChangeBookingRoomCommand, ChangeBookingRoomHandler, ChangeBookingRoomResult,
};
pub use create_booking::{CreateBookingCommand, CreateBookingHandler, CreateBookingResult};
pub use get_booking::{GetBookingHandler, GetBookingQuery};
