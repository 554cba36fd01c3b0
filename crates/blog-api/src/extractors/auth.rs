//! `AuthUser` extractor: the authenticated principal for a request.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use blog_auth::authenticator::{Authenticated, Credentials, RequestContext};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller available in handlers.
///
/// Reuses the principal attached by the `require_auth` middleware when
/// present, otherwise authenticates the request itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Authenticated);

impl std::ops::Deref for AuthUser {
    type Target = Authenticated;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Authenticate from the session cookie or the `Authorization` header.
pub async fn authenticate_headers(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<Authenticated, ApiError> {
    let jar = CookieJar::from_headers(headers);
    let cookie = jar
        .get(&state.config.auth.cookie.name)
        .map(|c| c.value());
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let auth = state
        .authenticator
        .authenticate(&Credentials::new(cookie, authorization))
        .await?;
    Ok(auth)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts
            .extensions
            .get::<RequestContext>()
            .and_then(RequestContext::auth)
        {
            return Ok(AuthUser(auth.clone()));
        }

        let auth = authenticate_headers(&parts.headers, state).await?;
        Ok(AuthUser(auth))
    }
}
