//! Role gate applied after authentication.

use blog_core::error::AppError;
use blog_entity::user::UserRole;

use crate::authenticator::Authenticated;

/// Admits authenticated principals whose role is in an allowed set.
///
/// `authorize` takes an [`Authenticated`], so a gate can only run after
/// authentication has succeeded.
#[derive(Debug, Clone)]
pub struct RoleGate {
    /// Roles admitted by this gate.
    allowed: Vec<UserRole>,
}

impl RoleGate {
    /// Creates a gate admitting the given roles.
    pub fn new(allowed: &[UserRole]) -> Self {
        Self {
            allowed: allowed.to_vec(),
        }
    }

    /// Gate admitting administrators only.
    pub fn admin_only() -> Self {
        Self::new(&[UserRole::Admin])
    }

    /// Whether the role is admitted.
    pub fn allows(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }

    /// Checks the principal's role against the allowed set.
    pub fn authorize(&self, auth: &Authenticated) -> Result<(), AppError> {
        let role = auth.role();
        if self.allows(role) {
            Ok(())
        } else {
            tracing::debug!(user_id = %auth.user_id(), role = %role, "Role gate denied request");
            Err(AppError::forbidden(format!(
                "Access denied: Role '{role}' is not authorized"
            )))
        }
    }
}
