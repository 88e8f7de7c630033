//! In-Memory Booking Store Adapter
//!
//! Implements the ticket, booking and session ports over a single
//! lock-protected map. Useful for testing and local development.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::{BookingView, Room, RoomOccupancy, Ticket, TicketStatus, TicketType};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, HotelId, RoomId, TicketId, TicketTypeId, Timestamp,
    UserId,
};
use crate::ports::{BookingRepository, SessionStore, TicketReader};

#[derive(Debug, Clone, Copy)]
struct BookingRecord {
    user_id: UserId,
    room_id: RoomId,
}

#[derive(Debug, Default)]
struct StoreState {
    tickets: HashMap<UserId, Ticket>,
    rooms: BTreeMap<RoomId, Room>,
    bookings: BTreeMap<BookingId, BookingRecord>,
    sessions: HashMap<String, UserId>,
    last_id: i32,
}

impl StoreState {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn bookings_in(&self, room_id: RoomId) -> Vec<BookingId> {
        self.bookings
            .iter()
            .filter(|(_, record)| record.room_id == room_id)
            .map(|(id, _)| *id)
            .collect()
    }

    fn booking_of(&self, user_id: UserId) -> Option<(BookingId, BookingRecord)> {
        self.bookings
            .iter()
            .find(|(_, record)| record.user_id == user_id)
            .map(|(id, record)| (*id, *record))
    }

    fn room_is_full(&self, room: &Room) -> bool {
        let occupants = self.bookings_in(room.id).len();
        u32::try_from(occupants).unwrap_or(u32::MAX) >= room.capacity
    }
}

/// In-memory implementation of all persistence ports.
///
/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room with the given capacity in `hotel_id`.
    pub async fn add_room(&self, hotel_id: HotelId, name: &str, capacity: u32) -> RoomId {
        let mut state = self.state.write().await;
        let id = RoomId::new(state.next_id()).expect("serial ids are positive");
        let now = Timestamp::now();
        state.rooms.insert(
            id,
            Room {
                id,
                name: name.to_string(),
                capacity,
                hotel_id,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Give `user_id` a ticket of a freshly created type.
    pub async fn add_ticket(
        &self,
        user_id: UserId,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> TicketId {
        let mut state = self.state.write().await;
        let type_id = TicketTypeId::new(state.next_id()).expect("serial ids are positive");
        let ticket_id = TicketId::new(state.next_id()).expect("serial ids are positive");
        state.tickets.insert(
            user_id,
            Ticket {
                id: ticket_id,
                user_id,
                status,
                ticket_type: TicketType {
                    id: type_id,
                    name: format!("Ticket type {}", type_id),
                    is_remote,
                    includes_hotel,
                },
            },
        );
        ticket_id
    }

    /// Register an active session token for `user_id`.
    pub async fn add_session(&self, token: impl Into<String>, user_id: UserId) {
        self.state.write().await.sessions.insert(token.into(), user_id);
    }

    /// Insert a booking without checking capacity, for seeding fixtures.
    pub async fn insert_booking(&self, room_id: RoomId, user_id: UserId) -> BookingId {
        let mut state = self.state.write().await;
        let id = BookingId::new(state.next_id()).expect("serial ids are positive");
        state.bookings.insert(id, BookingRecord { user_id, room_id });
        id
    }

    /// Number of bookings currently referencing `room_id`.
    pub async fn booking_count(&self, room_id: RoomId) -> usize {
        self.state.read().await.bookings_in(room_id).len()
    }

    /// Room currently assigned to `booking_id`.
    pub async fn room_of(&self, booking_id: BookingId) -> Option<RoomId> {
        self.state
            .read()
            .await
            .bookings
            .get(&booking_id)
            .map(|record| record.room_id)
    }
}

#[async_trait]
impl TicketReader for InMemoryBookingStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Ticket>, DomainError> {
        Ok(self.state.read().await.tickets.get(&user_id).cloned())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn find_room(&self, room_id: RoomId) -> Result<Option<RoomOccupancy>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .rooms
            .get(&room_id)
            .map(|room| RoomOccupancy::new(room.clone(), state.bookings_in(room_id))))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<BookingView>, DomainError> {
        let state = self.state.read().await;
        let Some((id, record)) = state.booking_of(user_id) else {
            return Ok(None);
        };
        let room = state.rooms.get(&record.room_id).cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Booking {} references missing room {}", id, record.room_id),
            )
        })?;
        Ok(Some(BookingView {
            id,
            user_id: record.user_id,
            room,
        }))
    }

    async fn create(
        &self,
        room_id: RoomId,
        user_id: UserId,
    ) -> Result<Option<BookingId>, DomainError> {
        let mut state = self.state.write().await;
        let room = state
            .rooms
            .get(&room_id)
            .ok_or_else(|| DomainError::new(ErrorCode::RoomNotFound, "Room not found"))?;
        if state.room_is_full(room) {
            return Ok(None);
        }

        let id = BookingId::new(state.next_id())?;
        state.bookings.insert(id, BookingRecord { user_id, room_id });
        Ok(Some(id))
    }

    async fn change_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<Option<BookingId>, DomainError> {
        let mut state = self.state.write().await;
        let room = state
            .rooms
            .get(&room_id)
            .ok_or_else(|| DomainError::new(ErrorCode::RoomNotFound, "Room not found"))?;
        if state.room_is_full(room) {
            return Ok(None);
        }

        let record = state
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| DomainError::new(ErrorCode::BookingNotFound, "Booking not found"))?;
        record.room_id = room_id;
        Ok(Some(booking_id))
    }
}

#[async_trait]
impl SessionStore for InMemoryBookingStore {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        Ok(self.state.read().await.sessions.get(token).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> HotelId {
        HotelId::new(1).unwrap()
    }

    fn user(id: i32) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn create_respects_capacity() {
        let store = InMemoryBookingStore::new();
        let room = store.add_room(hotel(), "101", 1).await;

        let first = store.create(room, user(1)).await.unwrap();
        let second = store.create(room, user(2)).await.unwrap();

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(store.booking_count(room).await, 1);
    }

    #[tokio::test]
    async fn create_in_unknown_room_fails() {
        let store = InMemoryBookingStore::new();
        let err = store
            .create(RoomId::new(99).unwrap(), user(1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }

    #[tokio::test]
    async fn find_room_lists_current_bookings() {
        let store = InMemoryBookingStore::new();
        let room = store.add_room(hotel(), "101", 3).await;
        let a = store.insert_booking(room, user(1)).await;
        let b = store.insert_booking(room, user(2)).await;

        let occupancy = store.find_room(room).await.unwrap().unwrap();
        assert_eq!(occupancy.bookings, vec![a, b]);
        assert_eq!(occupancy.room.capacity, 3);
    }

    #[tokio::test]
    async fn find_by_user_joins_room() {
        let store = InMemoryBookingStore::new();
        let room = store.add_room(hotel(), "Suite", 2).await;
        let booking = store.insert_booking(room, user(5)).await;

        let view = BookingRepository::find_by_user(&store, user(5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.id, booking);
        assert_eq!(view.room.name, "Suite");
        assert!(BookingRepository::find_by_user(&store, user(6))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn change_room_moves_booking_when_space_left() {
        let store = InMemoryBookingStore::new();
        let from = store.add_room(hotel(), "101", 1).await;
        let to = store.add_room(hotel(), "102", 1).await;
        let booking = store.insert_booking(from, user(1)).await;

        let moved = store.change_room(booking, to).await.unwrap();
        assert_eq!(moved, Some(booking));
        assert_eq!(store.room_of(booking).await, Some(to));
        assert_eq!(store.booking_count(from).await, 0);
    }

    #[tokio::test]
    async fn change_room_into_full_room_is_refused() {
        let store = InMemoryBookingStore::new();
        let from = store.add_room(hotel(), "101", 1).await;
        let to = store.add_room(hotel(), "102", 1).await;
        let booking = store.insert_booking(from, user(1)).await;
        store.insert_booking(to, user(2)).await;

        assert_eq!(store.change_room(booking, to).await.unwrap(), None);
        assert_eq!(store.room_of(booking).await, Some(from));
    }

    #[tokio::test]
    async fn sessions_resolve_to_users() {
        let store = InMemoryBookingStore::new();
        store.add_session("token-1", user(3)).await;

        assert_eq!(store.find_user_by_token("token-1").await.unwrap(), Some(user(3)));
        assert_eq!(store.find_user_by_token("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn tickets_are_found_by_user() {
        let store = InMemoryBookingStore::new();
        store.add_ticket(user(1), TicketStatus::Paid, false, true).await;

        let ticket = TicketReader::find_by_user(&store, user(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(ticket.ticket_type.includes_hotel);
    }
}
