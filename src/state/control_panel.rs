//! Control panel state: the slider, its label and the start/stop buttons

use serde::{Deserialize, Serialize};

/// Smallest slider value, in minutes
pub const SLIDER_MIN: f64 = 0.1;
/// Largest slider value, in minutes
pub const SLIDER_MAX: f64 = 60.0;
/// Slider value on launch when none is configured
pub const SLIDER_DEFAULT: f64 = 1.0;

/// Reject slider values the panel would never produce
pub fn validate_slider(value: f64) -> Result<f64, String> {
    if !value.is_finite() || !(SLIDER_MIN..=SLIDER_MAX).contains(&value) {
        return Err(format!(
            "Slider value {} is outside {}..={} minutes",
            value, SLIDER_MIN, SLIDER_MAX
        ));
    }
    Ok(value)
}

/// Mutable panel state. The button flags are derived from a single
/// running bit, so start and stop can never be enabled together.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    slider: f64,
    label: String,
    running: bool,
}

impl ControlPanel {
    pub fn new(slider: f64) -> Self {
        Self {
            slider,
            label: slider.to_string(),
            running: false,
        }
    }

    /// Move the slider; the label mirrors the new value
    pub fn set_slider(&mut self, value: f64) {
        self.slider = value;
        self.label = value.to_string();
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Slider minutes converted to the timer interval in seconds
    pub fn interval_seconds(&self) -> f64 {
        self.slider * 60.0
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn start_enabled(&self) -> bool {
        !self.running
    }

    pub fn stop_enabled(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> ControlState {
        ControlState {
            slider: self.slider,
            slider_label: self.label.clone(),
            interval_seconds: self.interval_seconds(),
            start_enabled: self.start_enabled(),
            stop_enabled: self.stop_enabled(),
        }
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(SLIDER_DEFAULT)
    }
}

/// Serializable view of the panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlState {
    pub slider: f64,
    pub slider_label: String,
    pub interval_seconds: f64,
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_a_minute_is_thirty_seconds() {
        let panel = ControlPanel::new(0.5);
        assert_eq!(panel.interval_seconds(), 30.0);
        assert_eq!(panel.label(), "0.5");
    }

    #[test]
    fn label_mirrors_slider() {
        let mut panel = ControlPanel::default();
        assert_eq!(panel.label(), "1");
        panel.set_slider(2.5);
        assert_eq!(panel.label(), "2.5");
        assert_eq!(panel.snapshot().slider_label, "2.5");
    }

    #[test]
    fn buttons_are_always_inverse() {
        let mut panel = ControlPanel::default();
        assert!(panel.start_enabled() && !panel.stop_enabled());
        panel.set_running(true);
        assert!(!panel.start_enabled() && panel.stop_enabled());
        panel.set_running(false);
        assert!(panel.start_enabled() && !panel.stop_enabled());
    }

    #[test]
    fn slider_range_is_enforced() {
        assert!(validate_slider(0.5).is_ok());
        assert!(validate_slider(SLIDER_MIN).is_ok());
        assert!(validate_slider(SLIDER_MAX).is_ok());
        assert!(validate_slider(0.0).is_err());
        assert!(validate_slider(-1.0).is_err());
        assert!(validate_slider(61.0).is_err());
        assert!(validate_slider(f64::NAN).is_err());
    }
}
