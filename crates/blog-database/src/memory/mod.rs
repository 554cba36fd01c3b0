//! In-memory store implementations.
//!
//! Used by the `memory` database provider and by tests. Data lives only as
//! long as the process.

pub mod blog;
pub mod user;

pub use blog::MemoryBlogStore;
pub use user::MemoryUserStore;
