use crate::core::Config;
use crate::db::MemStore;

/// Shared application state
///
/// Holds the configuration and the in-memory store. Cloning is cheap:
/// the store's collections are reference-counted, so every handler sees
/// the same data. Constructed once at startup and injected into handlers
/// through axum's `State` extractor instead of living in module-scoped
/// globals.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// In-memory dish and order collections
    pub store: MemStore,
}

impl ServerState {
    /// Create the application state with empty collections
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: MemStore::new(),
        }
    }

    /// Get a handle to the store
    pub fn store(&self) -> MemStore {
        self.store.clone()
    }
}
