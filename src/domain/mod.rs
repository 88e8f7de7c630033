//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `booking` - Tickets, rooms, eligibility and capacity rules

pub mod booking;
pub mod foundation;
