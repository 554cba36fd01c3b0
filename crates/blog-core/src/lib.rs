//! # blog-core
//!
//! Core crate for CilliBlog. Contains configuration schemas, the image
//! storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CilliBlog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
