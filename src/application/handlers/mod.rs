//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod booking;

pub use booking::{
    ChangeBookingRoomCommand, ChangeBookingRoomHandler, ChangeBookingRoomResult,
    CreateBookingCommand, CreateBookingHandler, CreateBookingResult, GetBookingHandler,
    GetBookingQuery,
};
