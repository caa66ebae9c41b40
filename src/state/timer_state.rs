//! Timer state structure and management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the jiggle timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    pub active: bool,
    pub interval_seconds: Option<f64>,
    pub started_at: Option<DateTime<Utc>>,
}

impl TimerState {
    /// Create a running timer state
    pub fn active(interval_seconds: f64, started_at: DateTime<Utc>) -> Self {
        Self {
            active: true,
            interval_seconds: Some(interval_seconds),
            started_at: Some(started_at),
        }
    }

    /// Create a stopped timer state
    pub fn inactive() -> Self {
        Self {
            active: false,
            interval_seconds: None,
            started_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Interval in seconds if the timer is running
    pub fn interval_seconds(&self) -> Option<f64> {
        if self.active {
            self.interval_seconds
        } else {
            None
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::inactive()
    }
}
