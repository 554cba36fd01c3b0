//! Authenticated principals and the per-request context.

use uuid::Uuid;

use blog_entity::user::{User, UserRole};

use crate::jwt::Claims;

/// Proof that a request was authenticated.
///
/// Only the [`Authenticator`](super::Authenticator) can build one, so any
/// code holding an `Authenticated` knows verification already happened.
#[derive(Debug, Clone)]
pub struct Authenticated {
    principal: User,
    claims: Claims,
}

impl Authenticated {
    pub(crate) fn new(principal: User, claims: Claims) -> Self {
        Self { principal, claims }
    }

    /// The user resolved from the token subject.
    pub fn principal(&self) -> &User {
        &self.principal
    }

    /// The verified claims.
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Shortcut for the principal's ID.
    pub fn user_id(&self) -> Uuid {
        self.principal.id
    }

    /// Shortcut for the principal's role.
    pub fn role(&self) -> UserRole {
        self.principal.role
    }
}

/// Typed per-request state carrying the optional principal.
///
/// The auth middleware inserts one holding the authenticated principal.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    auth: Option<Authenticated>,
}

impl RequestContext {
    /// A context carrying an authenticated principal.
    pub fn authenticated(auth: Authenticated) -> Self {
        Self { auth: Some(auth) }
    }

    /// The authentication result, if any.
    pub fn auth(&self) -> Option<&Authenticated> {
        self.auth.as_ref()
    }
}
