//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod control_panel;
pub mod app_state;
pub mod error;
pub mod timer_state;

// Re-export main types
pub use control_panel::{ControlPanel, ControlState};
pub use app_state::{AppOptions, AppState};
pub use error::ControlError;
pub use timer_state::TimerState;
