//! # blog-entity
//!
//! Domain entity models for CilliBlog. Every struct in this crate
//! represents a database table row or a domain value object.

pub mod blog;
pub mod image;
pub mod user;

pub use blog::Blog;
pub use image::ImageAsset;
pub use user::{User, UserRole};
