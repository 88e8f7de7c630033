//! Booking-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, UserId, ValidationError};

use super::Ineligibility;

/// Errors raised by the booking handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Required input was missing or malformed.
    ValidationFailed { field: String, message: String },
    /// The user's ticket does not grant lodging.
    NotEligible(Ineligibility),
    /// The requested room does not exist.
    RoomNotFound(RoomId),
    /// The user holds no booking to show.
    BookingNotFound(UserId),
    /// The user holds no booking to move.
    NoBookingToChange(UserId),
    /// Every slot in the room is taken.
    NoVacancies(RoomId),
    /// The booking in the request belongs to someone else.
    NotBookingOwner,
    /// Persistence or other infrastructure failure.
    Infrastructure(String),
}

impl BookingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BookingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn not_eligible(reason: Ineligibility) -> Self {
        BookingError::NotEligible(reason)
    }
    pub fn room_not_found(id: RoomId) -> Self {
        BookingError::RoomNotFound(id)
    }
    pub fn booking_not_found(user_id: UserId) -> Self {
        BookingError::BookingNotFound(user_id)
    }
    pub fn no_booking_to_change(user_id: UserId) -> Self {
        BookingError::NoBookingToChange(user_id)
    }
    pub fn no_vacancies(id: RoomId) -> Self {
        BookingError::NoVacancies(id)
    }
    pub fn not_booking_owner() -> Self {
        BookingError::NotBookingOwner
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BookingError::NotEligible(_) => ErrorCode::NotEligible,
            BookingError::RoomNotFound(_) => ErrorCode::RoomNotFound,
            BookingError::BookingNotFound(_) => ErrorCode::BookingNotFound,
            BookingError::NoBookingToChange(_) => ErrorCode::NoBookingToChange,
            BookingError::NoVacancies(_) => ErrorCode::NoVacancies,
            BookingError::NotBookingOwner => ErrorCode::Unauthorized,
            BookingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BookingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            BookingError::NotEligible(reason) => reason.user_message().to_string(),
            BookingError::RoomNotFound(id) => format!("Room not found: {}", id),
            BookingError::BookingNotFound(user_id) => {
                format!("No booking found for user {}", user_id)
            }
            BookingError::NoBookingToChange(user_id) => {
                format!("User {} has no booking to change", user_id)
            }
            BookingError::NoVacancies(id) => format!("No vacancies available in room {}", id),
            BookingError::NotBookingOwner => "Booking belongs to another user".to_string(),
            BookingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// True for failures that are not the caller's fault.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, BookingError::Infrastructure(_))
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => BookingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => BookingError::Infrastructure(err.to_string()),
        }
    }
}
