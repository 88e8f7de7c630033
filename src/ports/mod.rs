//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `TicketReader` - A user's ticket and ticket type
//! - `BookingRepository` - Rooms with occupants, booking reads and guarded writes
//! - `SessionStore` - Active session lookup by token
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token validation

mod booking_repository;
mod session_store;
mod session_validator;
mod ticket_reader;

pub use booking_repository::BookingRepository;
pub use session_store::SessionStore;
pub use session_validator::SessionValidator;
pub use ticket_reader::TicketReader;
