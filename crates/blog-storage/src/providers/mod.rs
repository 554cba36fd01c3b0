//! Image storage provider implementations.

pub mod cloudinary;
pub mod local;

pub use cloudinary::CloudinaryImageStorage;
pub use local::LocalImageStorage;
