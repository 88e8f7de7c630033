//! Strongly-typed identifier value objects.
//!
//! All identifiers in the booking store are positive `SERIAL` integers.
//! Each id is a transparent newtype so a `RoomId` can never be passed where a
//! `BookingId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates the id, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::out_of_range($field, 1, i32::MAX, value));
                }
                Ok(Self(value))
            }

            /// Returns the raw integer value.
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))?;
                Self::new(value)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                let value = i32::try_from(value)
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))?;
                Self::new(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of a registered platform user.
    UserId,
    "user_id"
);

integer_id!(
    /// Identifier of a hotel room.
    RoomId,
    "room_id"
);

integer_id!(
    /// Identifier of a room booking.
    BookingId,
    "booking_id"
);

integer_id!(
    /// Identifier of a hotel.
    HotelId,
    "hotel_id"
);

integer_id!(
    /// Identifier of an event ticket.
    TicketId,
    "ticket_id"
);

integer_id!(
    /// Identifier of a ticket category.
    TicketTypeId,
    "ticket_type_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_are_accepted() {
        let id = RoomId::new(42).unwrap();
        assert_eq!(id.as_i32(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(matches!(
            BookingId::new(0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(UserId::new(-3).is_err());
    }

    #[test]
    fn ids_parse_from_path_segments() {
        let id: BookingId = "17".parse().unwrap();
        assert_eq!(id, BookingId::new(17).unwrap());

        let padded: BookingId = " 8 ".parse().unwrap();
        assert_eq!(padded.as_i32(), 8);
    }

    #[test]
    fn non_numeric_id_is_invalid_format() {
        let err = "abc".parse::<RoomId>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(err.to_string().contains("room_id"));
    }

    #[test]
    fn oversized_id_is_rejected() {
        assert!(RoomId::try_from(i64::from(i32::MAX) + 1).is_err());
        assert_eq!(RoomId::try_from(5_i64).unwrap().as_i32(), 5);
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let id = BookingId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: BookingId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
