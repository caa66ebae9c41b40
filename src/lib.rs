//! Wiggle My Mouse - keeps the system awake by nudging the mouse cursor
//!
//! A repeating timer moves the pointer a few pixels away and back again,
//! controlled through a small local HTTP panel.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
