//! PostgreSQL repository implementations.

pub mod blog;
pub mod user;

pub use blog::BlogRepository;
pub use user::UserRepository;
