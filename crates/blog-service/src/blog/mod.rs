//! Blog post management.

pub mod service;

pub use service::{BlogService, MIN_ABOUT_LENGTH, NewBlogInput};
