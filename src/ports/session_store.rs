//! Session store port.
//!
//! Sessions are created by the sign-in flow of the platform; this service
//! only needs to know whether a bearer token still belongs to an active
//! session, and whose it is.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Resolves bearer tokens to the users holding them.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find the user owning an active session for `token`.
    ///
    /// Returns `None` if no session holds the token.
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError>;
}
