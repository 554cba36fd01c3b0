//! Authentication middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use blog_auth::authenticator::RequestContext;

use crate::error::ApiError;
use crate::extractors::auth::authenticate_headers;
use crate::state::AppState;

/// Rejects unauthenticated requests and attaches the principal.
///
/// On success the request carries a [`RequestContext`] holding the
/// principal; on failure the route handler never runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth = authenticate_headers(request.headers(), &state).await?;

    tracing::debug!(
        user_id = %auth.user_id(),
        expires_at = auth.claims().exp,
        "Request authenticated"
    );
    request
        .extensions_mut()
        .insert(RequestContext::authenticated(auth));

    Ok(next.run(request).await)
}
