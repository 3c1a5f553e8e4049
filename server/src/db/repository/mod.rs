//! Repository Module
//!
//! CRUD operations over the in-memory collections. Handlers never touch
//! the store directly; they go through a repository constructed from the
//! shared [`MemStore`](crate::db::MemStore) handle.

pub mod dish;
pub mod order;

// Re-exports
pub use dish::DishRepository;
pub use order::OrderRepository;

use shared::error::AppError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
        }
    }
}
