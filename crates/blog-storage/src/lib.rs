//! # blog-storage
//!
//! Image storage backends for CilliBlog. Implements
//! [`blog_core::traits::ImageStorage`] for the local filesystem and for
//! Cloudinary, and validates accepted image types.

pub mod manager;
pub mod mime;
pub mod providers;

pub use manager::build_image_storage;
pub use mime::{ensure_image_type, extension_for};
pub use providers::{CloudinaryImageStorage, LocalImageStorage};
