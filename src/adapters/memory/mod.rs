//! In-memory adapters.
//!
//! Back every persistence port with process memory, for tests and for
//! running the service without a database.

mod booking_store;

pub use booking_store::InMemoryBookingStore;
