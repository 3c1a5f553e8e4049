//! Delivery API Server - dishes and orders over in-memory collections
//!
//! # Architecture Overview
//!
//! - **HTTP API** (`api`): per-resource routers, validation chains, and
//!   terminal handlers
//! - **Storage** (`db`): process-lifetime in-memory collections behind
//!   repositories
//! - **Core** (`core`): configuration, shared state, server lifecycle
//!
//! # Module Structure
//!
//! ```text
//! server/src/
//! ├── core/          # Config, state, server, errors
//! ├── api/           # HTTP routes, validation, handlers
//! ├── db/            # In-memory store, models, repositories
//! └── utils/         # Logger and error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode};
