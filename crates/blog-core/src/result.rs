//! Convenience result type alias for CilliBlog.

use crate::error::AppError;

/// A specialized `Result` type for CilliBlog operations.
pub type AppResult<T> = Result<T, AppError>;
