//! Hotel rooms and their current occupancy.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, HotelId, RoomId, Timestamp};

/// A hotel room with a fixed number of beds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room together with the bookings currently assigned to it.
///
/// `bookings` is ordered by booking id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub room: Room,
    pub bookings: Vec<BookingId>,
}

impl RoomOccupancy {
    pub fn new(room: Room, mut bookings: Vec<BookingId>) -> Self {
        bookings.sort();
        Self { room, bookings }
    }

    /// Number of bookings referencing the room.
    pub fn occupants(&self) -> u32 {
        u32::try_from(self.bookings.len()).unwrap_or(u32::MAX)
    }

    /// Capacity gate: true while at least one slot is free.
    pub fn has_vacancy(&self) -> bool {
        self.occupants() < self.room.capacity
    }
}
