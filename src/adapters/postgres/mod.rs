//! PostgreSQL adapters - Database implementations for the persistence ports.
//!
//! - `PostgresTicketReader` - Ticket lookup through the user's enrollment
//! - `PostgresBookingRepository` - Rooms and bookings with locked capacity checks
//! - `PostgresSessionStore` - Bearer token to user resolution

mod booking_repository;
mod session_store;
mod ticket_reader;

pub use booking_repository::PostgresBookingRepository;
pub use session_store::PostgresSessionStore;
pub use ticket_reader::PostgresTicketReader;
