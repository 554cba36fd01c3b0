//! Role-gated extractor.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use blog_auth::authenticator::Authenticated;
use blog_auth::rbac::RoleGate;
use blog_entity::user::UserRole;

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Compile-time set of roles admitted by [`Authorized`].
pub trait RoleConstraint: Send + Sync + 'static {
    /// Roles that pass the gate.
    const ROLES: &'static [UserRole];
}

/// Administrators only.
#[derive(Debug, Clone, Copy)]
pub struct AdminRole;

impl RoleConstraint for AdminRole {
    const ROLES: &'static [UserRole] = &[UserRole::Admin];
}

/// An authenticated caller whose role satisfies `R`.
///
/// Authentication runs first; the role gate only sees its result.
#[derive(Debug, Clone)]
pub struct Authorized<R: RoleConstraint> {
    auth: Authenticated,
    _role: PhantomData<fn() -> R>,
}

impl<R: RoleConstraint> Authorized<R> {
    /// The authenticated caller.
    pub fn auth(&self) -> &Authenticated {
        &self.auth
    }
}

impl<R: RoleConstraint> std::ops::Deref for Authorized<R> {
    type Target = Authenticated;
    fn deref(&self) -> &Self::Target {
        &self.auth
    }
}

impl<R: RoleConstraint> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(auth) = AuthUser::from_request_parts(parts, state).await?;
        RoleGate::new(R::ROLES).authorize(&auth)?;

        Ok(Self {
            auth,
            _role: PhantomData,
        })
    }
}
