//! GetBookingHandler - Query handler for the caller's booking.

use std::sync::Arc;

use crate::domain::booking::{BookingError, BookingView};
use crate::domain::foundation::UserId;
use crate::ports::BookingRepository;

/// Query for the booking held by a user.
#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub user_id: UserId,
}

/// Handler for retrieving a user's booking.
pub struct GetBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(&self, query: GetBookingQuery) -> Result<BookingView, BookingError> {
        self.bookings
            .find_by_user(query.user_id)
            .await?
            .ok_or_else(|| BookingError::booking_not_found(query.user_id))
    }
}
