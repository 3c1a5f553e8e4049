//! Shared types for the delivery API
//!
//! Common types used by the server and by integration tests: the unified
//! error system and the `{ "data": ... }` wire envelope.

pub mod error;
pub mod response;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::Data;
