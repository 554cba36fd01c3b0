//! # blog-api
//!
//! HTTP API layer for CilliBlog built on Axum.
//!
//! Provides the REST endpoints, middleware (authentication, CORS, logging),
//! extractors for authenticated and role-gated callers, DTOs, and error
//! mapping.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
