//! Account registration, login, and profile lookups.

pub mod service;

pub use service::{AuthSession, LoginInput, RegisterInput, UserService};
