//! HTTP DTOs for booking endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingView, Room};
use crate::domain::foundation::{BookingId, RoomId};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Raw `roomId` as clients send it: a number, a numeric string, or junk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoomIdInput {
    Number(i64),
    /// `4.0` and friends; only whole values name a room.
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

fn room_id_from_float(n: f64) -> Option<RoomId> {
    if !n.is_finite() || n.fract() != 0.0 {
        return None;
    }
    // Saturating cast; out-of-range values are rejected by the id conversion
    RoomId::try_from(n as i64).ok()
}

/// Body of create and move requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSelectionRequest {
    #[serde(default)]
    pub room_id: Option<RoomIdInput>,
}

impl RoomSelectionRequest {
    /// The requested room, or `None` if the id is missing, zero, negative or
    /// not a number.
    pub fn room_id(&self) -> Option<RoomId> {
        match self.room_id.as_ref()? {
            RoomIdInput::Number(n) => RoomId::try_from(*n).ok(),
            RoomIdInput::Float(n) => room_id_from_float(*n),
            RoomIdInput::Text(s) => s
                .parse()
                .ok()
                .or_else(|| s.trim().parse::<f64>().ok().and_then(room_id_from_float)),
            RoomIdInput::Other(_) => None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for booking command operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: i32,
}

impl From<BookingId> for BookingIdResponse {
    fn from(id: BookingId) -> Self {
        Self {
            booking_id: id.as_i32(),
        }
    }
}

/// Room snapshot embedded in a booking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: u32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.as_i32(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.as_i32(),
            created_at: room.created_at.to_iso_string(),
            updated_at: room.updated_at.to_iso_string(),
        }
    }
}

/// The caller's booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i32,
    #[serde(rename = "Room")]
    pub room: RoomResponse,
}

impl From<BookingView> for BookingResponse {
    fn from(view: BookingView) -> Self {
        Self {
            id: view.id.as_i32(),
            room: view.room.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
