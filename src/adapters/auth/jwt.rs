//! HS256 JWT adapter for bearer token validation.
//!
//! A token is accepted when:
//!
//! 1. Its signature verifies against the shared secret
//! 2. It carries a positive numeric `userId` claim (and, if present, an
//!    unexpired `exp`)
//! 3. An active session row holds the exact token, for the same user
//!
//! Tokens are issued by the platform's sign-in flow, not by this service.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionStore, SessionValidator};

/// Claims carried by platform access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    #[serde(rename = "userId")]
    user_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

/// Production implementation of `SessionValidator`.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionStore>,
}

impl JwtSessionValidator {
    /// Create a validator for tokens signed with `secret`.
    ///
    /// `leeway_secs` is the clock skew tolerated when checking `exp`.
    pub fn new(secret: &SecretString, leeway_secs: u64, sessions: Arc<dyn SessionStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Platform tokens are not required to expire; the session row governs lifetime
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.leeway = leeway_secs;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_user(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            },
        )?;

        UserId::try_from(data.claims.user_id).map_err(|_| {
            tracing::warn!("Invalid userId claim in token: {}", data.claims.user_id);
            AuthError::InvalidToken
        })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claimed = self.decode_user(token)?;

        let session_user = self
            .sessions
            .find_user_by_token(token)
            .await
            .map_err(|e| {
                tracing::error!("Session lookup failed: {}", e);
                AuthError::service_unavailable(e.message)
            })?
            .ok_or_else(|| {
                tracing::debug!(user_id = %claimed, "No active session for token");
                AuthError::SessionNotFound
            })?;

        if session_user != claimed {
            tracing::warn!(
                claimed = %claimed,
                session_user = %session_user,
                "Token user does not match session owner"
            );
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(claimed))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
