//! # blog-auth
//!
//! Authentication and authorization for CilliBlog.
//!
//! ## Modules
//!
//! - `jwt` - session token creation and verification
//! - `password` - Argon2id password hashing and policy enforcement
//! - `authenticator` - credential extraction, principal resolution, and the
//!   typed per-request context
//! - `rbac` - the role gate applied to authenticated requests

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use authenticator::{Authenticated, Authenticator, Credentials, RequestContext};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RoleGate;
