//! Route handlers, grouped by resource.

pub mod blog;
pub mod health;
pub mod user;
