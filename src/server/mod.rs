// Server module entry
// Provides listener setup, connection handling, the accept loop and
// graceful shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use listener::bind_listener;
pub use server_loop::run_server;
