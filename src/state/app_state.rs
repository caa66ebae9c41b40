//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{
    control_panel::validate_slider,
    ControlError, ControlPanel, ControlState, TimerState,
};
use crate::{
    services::{Jiggler, PointerDevice},
    tasks::TimerController,
};

/// Settings the application state is built from
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub port: u16,
    pub host: String,
    /// Initial slider value in minutes
    pub slider: f64,
    pub distance: f64,
    pub delay: Duration,
}

/// Top-level owner of the jiggle timer, the panel and the jiggler
pub struct AppState {
    /// The one repeating timer, if running
    pub controller: Arc<Mutex<TimerController>>,
    /// Slider and button state
    pub panel: Arc<Mutex<ControlPanel>>,
    pub jiggler: Arc<Jiggler>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState; the timer starts out stopped
    pub fn new(options: AppOptions, pointer: Arc<dyn PointerDevice>) -> Result<Self, ControlError> {
        let slider = validate_slider(options.slider).map_err(ControlError::InvalidSlider)?;

        Ok(Self {
            controller: Arc::new(Mutex::new(TimerController::new())),
            panel: Arc::new(Mutex::new(ControlPanel::new(slider))),
            jiggler: Arc::new(Jiggler::new(pointer, options.distance, options.delay)),
            start_time: Instant::now(),
            port: options.port,
            host: options.host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        })
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Move the slider to `value` minutes
    pub fn set_slider(&self, value: f64) -> Result<ControlState, ControlError> {
        let value = validate_slider(value).map_err(ControlError::InvalidSlider)?;

        let mut panel = self.panel.lock()
            .map_err(|e| ControlError::lock("control panel", e))?;
        panel.set_slider(value);
        let snapshot = panel.snapshot();
        drop(panel);

        info!("Slider set to {} minutes", value);
        self.record_action("slider");
        Ok(snapshot)
    }

    /// Start jiggling at the slider's interval.
    ///
    /// Fails with `AlreadyRunning` while the Start button is disabled.
    pub fn start(&self) -> Result<ControlState, ControlError> {
        let mut controller = self.controller.lock()
            .map_err(|e| ControlError::lock("timer controller", e))?;
        let mut panel = self.panel.lock()
            .map_err(|e| ControlError::lock("control panel", e))?;

        if !panel.start_enabled() {
            return Err(ControlError::AlreadyRunning);
        }
        info!("Start button pushed");

        let interval = Duration::try_from_secs_f64(panel.interval_seconds())
            .map_err(|e| ControlError::Timer(e.to_string()))?;

        let jiggler = Arc::clone(&self.jiggler);
        controller
            .start(interval, move || {
                jiggler.fire();
            })
            .map_err(ControlError::Timer)?;
        panel.set_running(true);
        let snapshot = panel.snapshot();
        drop(panel);
        drop(controller);

        self.record_action("start");
        Ok(snapshot)
    }

    /// Stop jiggling; stopping twice is fine
    pub fn stop(&self) -> Result<ControlState, ControlError> {
        info!("Stop button pushed");
        let snapshot = self.halt()?;
        self.record_action("stop");
        Ok(snapshot)
    }

    /// Stop the timer on process exit without recording a panel action
    pub fn shutdown(&self) -> Result<(), ControlError> {
        self.halt().map(|_| ())
    }

    fn halt(&self) -> Result<ControlState, ControlError> {
        let mut controller = self.controller.lock()
            .map_err(|e| ControlError::lock("timer controller", e))?;
        let mut panel = self.panel.lock()
            .map_err(|e| ControlError::lock("control panel", e))?;

        controller.stop();
        panel.set_running(false);
        Ok(panel.snapshot())
    }

    /// Get current panel state
    pub fn get_control_state(&self) -> Result<ControlState, ControlError> {
        self.panel.lock()
            .map(|panel| panel.snapshot())
            .map_err(|e| ControlError::lock("control panel", e))
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, ControlError> {
        self.controller.lock()
            .map(|controller| controller.state())
            .map_err(|e| ControlError::lock("timer controller", e))
    }

    /// Number of jiggles performed since launch
    pub fn jiggle_count(&self) -> u64 {
        self.jiggler.fired()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
