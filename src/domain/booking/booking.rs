//! Booking read model.

use crate::domain::foundation::{BookingId, UserId};

use super::Room;

/// A user's booking joined with a snapshot of its room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingView {
    pub id: BookingId,
    pub user_id: UserId,
    pub room: Room,
}
