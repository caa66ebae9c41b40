//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{
    services::jiggler::{DEFAULT_DELAY, DEFAULT_DISTANCE},
    state::{control_panel::{validate_slider, SLIDER_DEFAULT}, AppOptions},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "wiggle-my-mouse")]
#[command(about = "Keeps the system awake by periodically nudging the mouse cursor")]
#[command(version)]
pub struct Config {
    /// Port to bind the control panel to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Jiggle interval in minutes (initial slider value)
    #[arg(short, long, default_value_t = SLIDER_DEFAULT, value_parser = parse_minutes)]
    pub minutes: f64,

    /// Horizontal jiggle distance in pixels
    #[arg(long, default_value_t = DEFAULT_DISTANCE, value_parser = parse_distance)]
    pub distance: f64,

    /// Delay before moving the pointer back, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Start jiggling right away instead of waiting for /start
    #[arg(short, long)]
    pub start: bool,

    /// Log moves instead of injecting them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_minutes(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    validate_slider(value)
}

fn parse_distance(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() {
        return Err(format!("Distance must be a finite number of pixels, got {}", raw));
    }
    Ok(value)
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            port: self.port,
            host: self.host.clone(),
            slider: self.minutes,
            distance: self.distance,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}
