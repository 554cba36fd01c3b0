//! # blog-database
//!
//! Persistence for CilliBlog: the [`UserStore`] and [`BlogStore`] traits,
//! their PostgreSQL repositories, in-memory counterparts, connection
//! management, and migrations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::BlogDatabase;
pub use store::{BlogStore, UserStore};
