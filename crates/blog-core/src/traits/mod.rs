//! Core traits defined in `blog-core` and implemented by other crates.

pub mod storage;

pub use storage::{ImageStorage, ImageUpload, StoredImage};
