//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{ControlState, TimerState};

/// API response structure for panel actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub controls: ControlState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, controls: ControlState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            controls,
        }
    }

    /// Create a response reflecting the panel's current running state
    pub fn from_controls(message: String, controls: ControlState) -> Self {
        let status = if controls.stop_enabled { "running" } else { "stopped" };
        Self::new(status.to_string(), message, controls)
    }

    /// Create an error response
    pub fn error(message: String, controls: ControlState) -> Self {
        Self::new("error".to_string(), message, controls)
    }
}

/// Request body for PUT /slider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderRequest {
    /// Interval in minutes
    pub value: f64,
}

/// Status response with timer information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub controls: ControlState,
    pub timer: TimerState,
    pub jiggles: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
