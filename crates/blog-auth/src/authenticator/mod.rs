//! Request authentication: token selection, verification, and principal
//! resolution.

pub mod context;
pub mod credentials;

use std::sync::Arc;

use tracing::{debug, error, warn};

use blog_core::error::AppError;
use blog_database::store::UserStore;

use crate::jwt::JwtDecoder;

pub use context::{Authenticated, RequestContext};
pub use credentials::Credentials;

/// Message returned for every missing or rejected token.
pub const UNAUTHENTICATED_MESSAGE: &str = "User not authenticated";

/// Message returned when the token subject no longer exists.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Verifies presented credentials and resolves the principal.
#[derive(Debug, Clone)]
pub struct Authenticator {
    decoder: JwtDecoder,
    users: Arc<dyn UserStore>,
}

impl Authenticator {
    /// Creates an authenticator over the given verifier and user store.
    pub fn new(decoder: JwtDecoder, users: Arc<dyn UserStore>) -> Self {
        Self { decoder, users }
    }

    /// Authenticate a request.
    ///
    /// Fails with 401 when no token is presented or it does not verify,
    /// and with 404 when the subject is unknown. Has no side effects.
    pub async fn authenticate(
        &self,
        credentials: &Credentials<'_>,
    ) -> Result<Authenticated, AppError> {
        let token = credentials.token().ok_or_else(|| {
            debug!("No session token presented");
            AppError::unauthorized(UNAUTHENTICATED_MESSAGE)
        })?;

        let claims = self.decoder.decode(token).map_err(|e| {
            warn!(reason = %e.message, "Token verification failed");
            AppError::unauthorized(UNAUTHENTICATED_MESSAGE)
        })?;

        match self.users.find_by_id(claims.user_id).await {
            Ok(Some(user)) => Ok(Authenticated::new(user, claims)),
            Ok(None) => {
                debug!(user_id = %claims.user_id, "Token subject not found");
                Err(AppError::not_found(USER_NOT_FOUND_MESSAGE))
            }
            Err(e) => {
                error!(user_id = %claims.user_id, error = %e, "Principal lookup failed");
                Err(AppError::unauthorized(UNAUTHENTICATED_MESSAGE))
            }
        }
    }
}
