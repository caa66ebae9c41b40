//! Errors returned by panel actions

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("{0}")]
    InvalidSlider(String),
    #[error("Start is disabled while jiggling is running")]
    AlreadyRunning,
    #[error("Failed to lock {what}: {reason}")]
    Lock { what: &'static str, reason: String },
    #[error("Timer error: {0}")]
    Timer(String),
}

impl ControlError {
    pub(crate) fn lock<E: std::fmt::Display>(what: &'static str, e: E) -> Self {
        Self::Lock { what, reason: e.to_string() }
    }
}
