use std::net::AddrParseError;
use thiserror::Error;

/// Server lifecycle errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listener address: {0}")]
    Address(#[from] AddrParseError),

    #[error("failed to serve: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
