//! PostgreSQL implementation of TicketReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::booking::{Ticket, TicketStatus, TicketType};
use crate::domain::foundation::{DomainError, ErrorCode, TicketId, TicketTypeId, UserId};
use crate::ports::TicketReader;

/// Resolves a user's ticket through their enrollment.
#[derive(Clone)]
pub struct PostgresTicketReader {
    pool: PgPool,
}

impl PostgresTicketReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Ticket joined with its type.
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    user_id: i32,
    status: String,
    ticket_type_id: i32,
    ticket_type_name: String,
    is_remote: bool,
    includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let status: TicketStatus = row.status.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid ticket status: {}", row.status),
            )
        })?;

        Ok(Ticket {
            id: TicketId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(row.ticket_type_id)?,
                name: row.ticket_type_name,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
        })
    }
}

#[async_trait]
impl TicketReader for PostgresTicketReader {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Ticket>, DomainError> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT t.id, e.user_id, t.status::text AS status,
                   tt.id AS ticket_type_id, tt.name AS ticket_type_name,
                   tt.is_remote, tt.includes_hotel
            FROM tickets t
            JOIN enrollments e ON e.id = t.enrollment_id
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE e.user_id = $1
            ORDER BY t.id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch ticket", e))?;

        row.map(Ticket::try_from).transpose()
    }
}
