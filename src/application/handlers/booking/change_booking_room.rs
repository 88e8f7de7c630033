//! ChangeBookingRoomHandler - Command handler for moving a booking.
//!
//! Gates run in a fixed order so callers always see the same failure for
//! the same input:
//!
//! 1. room id present
//! 2. caller holds a booking
//! 3. target room exists
//! 4. caller owns the booking named in the request
//! 5. caller's ticket grants lodging
//! 6. target room has a free slot

use std::sync::Arc;

use crate::domain::booking::{assess_eligibility, BookingError};
use crate::domain::foundation::{BookingId, RoomId, UserId};
use crate::ports::{BookingRepository, TicketReader};

/// Command to move an existing booking to another room.
#[derive(Debug, Clone)]
pub struct ChangeBookingRoomCommand {
    pub user_id: UserId,
    pub booking_id: BookingId,
    pub room_id: Option<RoomId>,
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBookingRoomResult {
    pub booking_id: BookingId,
}

/// Handler for moving bookings between rooms.
pub struct ChangeBookingRoomHandler {
    tickets: Arc<dyn TicketReader>,
    bookings: Arc<dyn BookingRepository>,
}

impl ChangeBookingRoomHandler {
    pub fn new(tickets: Arc<dyn TicketReader>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { tickets, bookings }
    }

    pub async fn handle(
        &self,
        cmd: ChangeBookingRoomCommand,
    ) -> Result<ChangeBookingRoomResult, BookingError> {
        let room_id = cmd
            .room_id
            .ok_or_else(|| BookingError::validation("room_id", "roomId is required"))?;

        let existing = self
            .bookings
            .find_by_user(cmd.user_id)
            .await?
            .ok_or_else(|| BookingError::no_booking_to_change(cmd.user_id))?;

        let occupancy = self
            .bookings
            .find_room(room_id)
            .await?
            .ok_or_else(|| BookingError::room_not_found(room_id))?;

        if existing.id != cmd.booking_id {
            tracing::warn!(
                user_id = %cmd.user_id,
                requested_booking = %cmd.booking_id,
                owned_booking = %existing.id,
                "Attempt to move a booking owned by someone else"
            );
            return Err(BookingError::not_booking_owner());
        }

        let ticket = self.tickets.find_by_user(cmd.user_id).await?;
        assess_eligibility(ticket.as_ref()).map_err(BookingError::not_eligible)?;

        if !occupancy.has_vacancy() {
            return Err(BookingError::no_vacancies(room_id));
        }

        let booking_id = self
            .bookings
            .change_room(cmd.booking_id, room_id)
            .await?
            .ok_or_else(|| BookingError::no_vacancies(room_id))?;

        tracing::info!(
            booking_id = %booking_id,
            from_room = %existing.room.id,
            to_room = %room_id,
            user_id = %cmd.user_id,
            "Booking moved"
        );

        Ok(ChangeBookingRoomResult { booking_id })
    }
}
