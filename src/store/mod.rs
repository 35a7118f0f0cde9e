// Activity store module entry
// Holds the in-memory activity catalog and the signup/unregister operations

mod registry;
mod seed;
mod types;

// Re-export public types
pub use registry::{ActivityStore, SignupError, UnregisterError};
pub use seed::load_catalog;
pub use types::Activity;
