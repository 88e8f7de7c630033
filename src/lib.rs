//! Hotel Booking - room reservations for event ticket holders
//!
//! Attendees whose paid, in-person ticket includes lodging can book a slot
//! in a hotel room, look up their booking, and move it to another room.
//! Room capacity is never exceeded, even under concurrent requests.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
