//! Utility module - logging and error re-exports

pub mod logger;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
