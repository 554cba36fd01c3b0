//! Custom Axum extractors.

pub mod auth;
pub mod form;
pub mod path;
pub mod role;

pub use auth::AuthUser;
pub use form::MultipartForm;
pub use role::{AdminRole, Authorized, RoleConstraint};
