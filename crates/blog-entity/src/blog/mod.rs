//! Blog post entities.

pub mod model;

pub use model::{Blog, CreateBlog, UpdateBlog};
