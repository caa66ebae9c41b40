//! Background tasks module
//!
//! This module contains the repeating timer that runs alongside the HTTP server.

pub mod jiggle_timer;

// Re-export main types
pub use jiggle_timer::{jiggle_timer_task, TimerController};
