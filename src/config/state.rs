// Application state module
// Bundles the loaded configuration with the shared activity store

use crate::store::ActivityStore;

use super::types::Config;

/// Application state shared by every request handler.
///
/// The configuration is immutable after startup; the activity store
/// serializes its own mutations internally.
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
}

impl AppState {
    pub fn new(config: Config, store: ActivityStore) -> Self {
        Self { config, store }
    }
}
