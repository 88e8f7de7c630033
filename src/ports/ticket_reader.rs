//! Ticket reader port.
//!
//! Read-only access to the ticket a user purchased through their enrollment.

use async_trait::async_trait;

use crate::domain::booking::Ticket;
use crate::domain::foundation::{DomainError, UserId};

/// Looks up a user's ticket together with its ticket type.
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Find the ticket held by `user_id`.
    ///
    /// Returns `None` if the user has no enrollment or no ticket.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Ticket>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn TicketReader) {}
    }
}
