use std::sync::Arc;

use crate::storage::Storage;
use crate::utils::random::AliasGenerator;

/// Shared application state injected into all handlers.
///
/// The storage backend is the only shared mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub alias_generator: Arc<AliasGenerator>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, alias_generator: AliasGenerator) -> Self {
        Self {
            storage,
            alias_generator: Arc::new(alias_generator),
        }
    }
}
