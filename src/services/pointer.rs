//! Pointer backends: reading the cursor position and injecting pointer moves

use enigo::{Coordinate, Enigo, Mouse, Settings};
use thiserror::Error;
use tracing::{debug, info};

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same point shifted horizontally by `dx`
    pub fn offset_x(&self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y)
    }
}

/// Where a backend places (0, 0) when it reports the pointer location.
///
/// Injected moves are always expressed with a top-left origin, so a
/// bottom-left location has to be flipped against the display height first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    TopLeft,
    BottomLeft,
}

#[derive(Debug, Error)]
pub enum PointerError {
    #[error("event source unavailable: {0}")]
    Unavailable(String),
    #[error("injection failed: {0}")]
    InjectionFailed(String),
}

pub type PointerResult<T> = Result<T, PointerError>;

/// Platform capabilities the jiggler needs
pub trait PointerDevice: Send + Sync {
    /// Current pointer location, in this backend's `origin()` space
    fn location(&self) -> PointerResult<Position>;

    /// Height of the primary display
    fn display_height(&self) -> PointerResult<f64>;

    fn origin(&self) -> Origin {
        Origin::TopLeft
    }

    /// Post a synthetic "pointer moved" event at `position` (top-left origin)
    fn move_to(&self, position: Position) -> PointerResult<()>;
}

/// Real injection through `enigo`.
///
/// A fresh connection is opened per operation, so a display that goes away
/// (or never existed) only fails the call that needed it.
#[derive(Debug, Default)]
pub struct EnigoPointer;

impl EnigoPointer {
    pub fn new() -> Self {
        Self
    }

    fn connect(&self) -> PointerResult<Enigo> {
        Enigo::new(&Settings::default()).map_err(|e| PointerError::Unavailable(e.to_string()))
    }
}

impl PointerDevice for EnigoPointer {
    fn location(&self) -> PointerResult<Position> {
        let enigo = self.connect()?;
        let (x, y) = enigo
            .location()
            .map_err(|e| PointerError::Unavailable(e.to_string()))?;
        Ok(Position::new(x as f64, y as f64))
    }

    fn display_height(&self) -> PointerResult<f64> {
        let enigo = self.connect()?;
        let (_, height) = enigo
            .main_display()
            .map_err(|e| PointerError::Unavailable(e.to_string()))?;
        Ok(height as f64)
    }

    fn move_to(&self, position: Position) -> PointerResult<()> {
        let mut enigo = self.connect()?;
        let (x, y) = (position.x.round() as i32, position.y.round() as i32);
        debug!("Injecting pointer move to ({}, {})", x, y);
        enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| PointerError::InjectionFailed(e.to_string()))
    }
}

/// Dry-run backend: reports a fixed location and only logs the moves
#[derive(Debug, Clone)]
pub struct NoopPointer {
    position: Position,
    height: f64,
}

impl NoopPointer {
    pub fn new() -> Self {
        Self {
            position: Position::new(0.0, 0.0),
            height: 0.0,
        }
    }
}

impl Default for NoopPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDevice for NoopPointer {
    fn location(&self) -> PointerResult<Position> {
        Ok(self.position)
    }

    fn display_height(&self) -> PointerResult<f64> {
        Ok(self.height)
    }

    fn move_to(&self, position: Position) -> PointerResult<()> {
        info!("[dry-run] would move pointer to ({}, {})", position.x, position.y);
        Ok(())
    }
}
