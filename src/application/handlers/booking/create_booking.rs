//! CreateBookingHandler - Command handler for reserving a room.

use std::sync::Arc;

use crate::domain::booking::{assess_eligibility, BookingError};
use crate::domain::foundation::{BookingId, RoomId, UserId};
use crate::ports::{BookingRepository, TicketReader};

/// Command to book a room for the calling user.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub user_id: UserId,
    /// `None` when the request carried no usable room id.
    pub room_id: Option<RoomId>,
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingResult {
    pub booking_id: BookingId,
}

/// Handler for creating bookings.
pub struct CreateBookingHandler {
    tickets: Arc<dyn TicketReader>,
    bookings: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(tickets: Arc<dyn TicketReader>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { tickets, bookings }
    }

    pub async fn handle(
        &self,
        cmd: CreateBookingCommand,
    ) -> Result<CreateBookingResult, BookingError> {
        // 1. Room id is mandatory
        let room_id = cmd
            .room_id
            .ok_or_else(|| BookingError::validation("room_id", "roomId is required"))?;

        // 2. Eligibility gate
        let ticket = self.tickets.find_by_user(cmd.user_id).await?;
        assess_eligibility(ticket.as_ref()).map_err(BookingError::not_eligible)?;

        // 3. Room must exist
        let occupancy = self
            .bookings
            .find_room(room_id)
            .await?
            .ok_or_else(|| BookingError::room_not_found(room_id))?;

        // 4. Capacity gate
        if !occupancy.has_vacancy() {
            return Err(BookingError::no_vacancies(room_id));
        }

        // 5. Guarded write; None means the last slot went to a concurrent request
        let booking_id = self
            .bookings
            .create(room_id, cmd.user_id)
            .await?
            .ok_or_else(|| BookingError::no_vacancies(room_id))?;

        tracing::info!(
            booking_id = %booking_id,
            room_id = %room_id,
            user_id = %cmd.user_id,
            "Booking created"
        );

        Ok(CreateBookingResult { booking_id })
    }
}
