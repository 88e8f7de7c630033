//! Booking repository port.
//!
//! Defines the contract for reading rooms with their occupants and for
//! writing bookings.
//!
//! # Capacity guarantee
//!
//! Handlers check vacancy before writing, but two requests can pass that
//! check for the same last slot. `create` and `change_room` therefore
//! re-check capacity atomically with the write and return `Ok(None)` when the
//! room has no slot left at write time. A room's booking count can never
//! exceed its capacity through this port.
//!
//! # Example
//!
//! ```ignore
//! let occupancy = repo
//!     .find_room(room_id)
//!     .await?
//!     .ok_or(BookingError::RoomNotFound(room_id))?;
//!
//! if occupancy.has_vacancy() {
//!     match repo.create(room_id, user_id).await? {
//!         Some(booking_id) => println!("booked {}", booking_id),
//!         None => println!("room filled up meanwhile"),
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::booking::{BookingView, RoomOccupancy};
use crate::domain::foundation::{BookingId, DomainError, RoomId, UserId};

/// Repository port for rooms and bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a room with the bookings currently assigned to it.
    ///
    /// Returns `None` if the room does not exist.
    async fn find_room(&self, room_id: RoomId) -> Result<Option<RoomOccupancy>, DomainError>;

    /// Find the booking owned by `user_id`, joined with its room.
    ///
    /// Returns `None` if the user has no booking.
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<BookingView>, DomainError>;

    /// Create a booking of `room_id` for `user_id`.
    ///
    /// Returns `None` if the room was full at write time.
    ///
    /// # Errors
    ///
    /// - `RoomNotFound` if the room vanished
    /// - `DatabaseError` on persistence failure
    async fn create(
        &self,
        room_id: RoomId,
        user_id: UserId,
    ) -> Result<Option<BookingId>, DomainError>;

    /// Move `booking_id` to `room_id`.
    ///
    /// Returns `None` if the target room was full at write time.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the booking does not exist
    /// - `RoomNotFound` if the room vanished
    /// - `DatabaseError` on persistence failure
    async fn change_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<Option<BookingId>, DomainError>;
}
