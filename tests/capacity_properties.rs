//! Property tests for room capacity.
//!
//! Random sequences of create and move requests are replayed through the
//! handlers; afterwards no room may hold more bookings than its capacity,
//! and every rejection must be one the gates allow.

use std::sync::Arc;

use proptest::prelude::*;

use hotel_booking::adapters::memory::InMemoryBookingStore;
use hotel_booking::application::{
    ChangeBookingRoomCommand, ChangeBookingRoomHandler, CreateBookingCommand,
    CreateBookingHandler,
};
use hotel_booking::domain::booking::{BookingError, TicketStatus};
use hotel_booking::domain::foundation::{HotelId, RoomId, UserId};
use hotel_booking::ports::BookingRepository;

#[derive(Debug, Clone)]
enum Request {
    Create { user: usize, room: usize },
    Move { user: usize, room: usize },
}

fn request(users: usize, rooms: usize) -> impl Strategy<Value = Request> {
    prop_oneof![
        (0..users, 0..rooms).prop_map(|(user, room)| Request::Create { user, room }),
        (0..users, 0..rooms).prop_map(|(user, room)| Request::Move { user, room }),
    ]
}

fn scenario() -> impl Strategy<Value = (Vec<u32>, Vec<Request>)> {
    (prop::collection::vec(0u32..4, 1..4), 1usize..6).prop_flat_map(|(capacities, users)| {
        let rooms = capacities.len();
        (
            Just(capacities),
            prop::collection::vec(request(users, rooms), 0..40),
        )
    })
}

async fn replay(capacities: &[u32], requests: &[Request]) -> Result<(), TestCaseError> {
    let store = InMemoryBookingStore::new();
    let shared = Arc::new(store.clone());
    let create = CreateBookingHandler::new(shared.clone(), shared.clone());
    let change = ChangeBookingRoomHandler::new(shared.clone(), shared);

    let mut rooms: Vec<RoomId> = Vec::new();
    for (i, capacity) in capacities.iter().enumerate() {
        rooms.push(
            store
                .add_room(HotelId::new(1).unwrap(), &format!("R{}", i), *capacity)
                .await,
        );
    }
    for id in 1..=6 {
        store
            .add_ticket(UserId::new(id).unwrap(), TicketStatus::Paid, false, true)
            .await;
    }

    for req in requests {
        match req {
            Request::Create { user, room } => {
                let user_id = UserId::new(*user as i32 + 1).unwrap();
                let result = create
                    .handle(CreateBookingCommand {
                        user_id,
                        room_id: Some(rooms[*room]),
                    })
                    .await;
                if let Err(err) = result {
                    prop_assert_eq!(err, BookingError::NoVacancies(rooms[*room]));
                }
            }
            Request::Move { user, room } => {
                let user_id = UserId::new(*user as i32 + 1).unwrap();
                let Some(current) = BookingRepository::find_by_user(&store, user_id).await.unwrap() else {
                    continue;
                };
                let result = change
                    .handle(ChangeBookingRoomCommand {
                        user_id,
                        booking_id: current.id,
                        room_id: Some(rooms[*room]),
                    })
                    .await;
                match result {
                    Ok(_) => prop_assert_eq!(store.room_of(current.id).await, Some(rooms[*room])),
                    Err(err) => {
                        prop_assert_eq!(err, BookingError::NoVacancies(rooms[*room]));
                        prop_assert_eq!(store.room_of(current.id).await, Some(current.room.id));
                    }
                }
            }
        }

        for (room_id, capacity) in rooms.iter().zip(capacities) {
            prop_assert!(store.booking_count(*room_id).await <= *capacity as usize);
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn rooms_never_exceed_capacity((capacities, requests) in scenario()) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(replay(&capacities, &requests))?;
    }
}
