//! Booking domain - tickets, rooms, bookings and the rules connecting them.
//!
//! - `eligibility` - whether a ticket grants lodging
//! - `room` - rooms and the capacity gate
//! - `errors` - error kinds reported by the booking handlers

mod booking;
mod eligibility;
mod errors;
mod room;
mod ticket;

pub use booking::BookingView;
pub use eligibility::{assess_eligibility, Ineligibility};
pub use errors::BookingError;
pub use room::{Room, RoomOccupancy};
pub use ticket::{Ticket, TicketStatus, TicketType};
