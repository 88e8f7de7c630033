//! PostgreSQL implementation of BookingRepository.
//!
//! Writes lock the target room row (`SELECT ... FOR UPDATE`) before counting
//! its bookings, so two transactions competing for the last slot serialize
//! on the room and the loser sees the room as full.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::booking::{BookingView, Room, RoomOccupancy};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, HotelId, RoomId, Timestamp, UserId,
};
use crate::ports::BookingRepository;

/// PostgreSQL implementation of the BookingRepository port.
#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a room.
#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RoomRow> for Room {
    type Error = DomainError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let capacity = u32::try_from(row.capacity).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Room {} has negative capacity {}", row.id, row.capacity),
            )
        })?;

        Ok(Room {
            id: RoomId::new(row.id)?,
            name: row.name,
            capacity,
            hotel_id: HotelId::new(row.hotel_id)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

/// Booking joined with its room.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    booking_id: i32,
    user_id: i32,
    #[sqlx(flatten)]
    room: RoomRow,
}

impl TryFrom<BookingRow> for BookingView {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(BookingView {
            id: BookingId::new(row.booking_id)?,
            user_id: UserId::new(row.user_id)?,
            room: Room::try_from(row.room)?,
        })
    }
}

/// Lock `room_id` for the rest of the transaction and report whether a
/// slot is still free.
async fn lock_room_with_vacancy(
    tx: &mut Transaction<'_, Postgres>,
    room_id: RoomId,
) -> Result<bool, DomainError> {
    let capacity: Option<(i32,)> =
        sqlx::query_as("SELECT capacity FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(room_id.as_i32())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| DomainError::database("Failed to lock room", e))?;

    let (capacity,) = capacity.ok_or_else(|| {
        DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", room_id))
    })?;

    let (occupants,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
        .bind(room_id.as_i32())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to count bookings", e))?;

    Ok(occupants < i64::from(capacity))
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn find_room(&self, room_id: RoomId) -> Result<Option<RoomOccupancy>, DomainError> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(room_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch room", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let room = Room::try_from(row)?;

        let booking_ids: Vec<(i32,)> =
            sqlx::query_as("SELECT id FROM bookings WHERE room_id = $1 ORDER BY id")
                .bind(room_id.as_i32())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch room bookings", e))?;

        let bookings = booking_ids
            .into_iter()
            .map(|(id,)| BookingId::new(id).map_err(DomainError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(RoomOccupancy::new(room, bookings)))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<BookingView>, DomainError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            SELECT b.id AS booking_id, b.user_id,
                   r.id, r.name, r.capacity, r.hotel_id, r.created_at, r.updated_at
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            WHERE b.user_id = $1
            ORDER BY b.id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch booking", e))?;

        row.map(BookingView::try_from).transpose()
    }

    async fn create(
        &self,
        room_id: RoomId,
        user_id: UserId,
    ) -> Result<Option<BookingId>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        if !lock_room_with_vacancy(&mut tx, room_id).await? {
            // Dropping the transaction rolls it back and releases the lock
            return Ok(None);
        }

        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO bookings (user_id, room_id, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(user_id.as_i32())
        .bind(room_id.as_i32())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert booking", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(Some(BookingId::new(id)?))
    }

    async fn change_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<Option<BookingId>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        if !lock_room_with_vacancy(&mut tx, room_id).await? {
            return Ok(None);
        }

        let updated: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE bookings
            SET room_id = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(booking_id.as_i32())
        .bind(room_id.as_i32())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update booking", e))?;

        let (id,) = updated.ok_or_else(|| {
            DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking_id),
            )
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(Some(BookingId::new(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_row(capacity: i32) -> RoomRow {
        let now = Utc::now();
        RoomRow {
            id: 4,
            name: "Ocean view".to_string(),
            capacity,
            hotel_id: 2,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn converts_room_row() {
        let room = Room::try_from(room_row(3)).unwrap();

        assert_eq!(room.id.as_i32(), 4);
        assert_eq!(room.capacity, 3);
        assert_eq!(room.hotel_id.as_i32(), 2);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let err = Room::try_from(room_row(-1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn converts_booking_row_with_room() {
        let view = BookingView::try_from(BookingRow {
            booking_id: 11,
            user_id: 5,
            room: room_row(2),
        })
        .unwrap();

        assert_eq!(view.id.as_i32(), 11);
        assert_eq!(view.user_id.as_i32(), 5);
        assert_eq!(view.room.name, "Ocean view");
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        let result = BookingView::try_from(BookingRow {
            booking_id: 0,
            user_id: 5,
            room: room_row(2),
        });
        assert!(result.is_err());
    }
}
