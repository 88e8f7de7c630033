//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (JWT + session table, mock)
//! - `http` - axum router, middleware and DTOs
//! - `memory` - In-memory persistence for tests and local runs
//! - `postgres` - PostgreSQL persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
