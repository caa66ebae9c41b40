//! Cursor jiggler: one move away and one move back per fire

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{task::JoinHandle, time::sleep};
use tracing::{debug, warn};

use super::pointer::{Origin, PointerDevice, Position};

/// Horizontal distance of a jiggle
pub const DEFAULT_DISTANCE: f64 = 15.0;

/// Pause before moving back, long enough for the move to register
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

pub struct Jiggler {
    pointer: Arc<dyn PointerDevice>,
    distance: f64,
    delay: Duration,
    fired: AtomicU64,
}

impl Jiggler {
    pub fn new(pointer: Arc<dyn PointerDevice>, distance: f64, delay: Duration) -> Self {
        Self {
            pointer,
            distance,
            delay,
            fired: AtomicU64::new(0),
        }
    }

    pub fn with_defaults(pointer: Arc<dyn PointerDevice>) -> Self {
        Self::new(pointer, DEFAULT_DISTANCE, DEFAULT_DELAY)
    }

    /// Number of jiggles that made it past the first move
    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::Relaxed)
    }

    /// Pointer location converted to top-left coordinates, or `None` when
    /// the platform can't tell us where the pointer is.
    fn current_position(&self) -> Option<Position> {
        let location = match self.pointer.location() {
            Ok(p) => p,
            Err(e) => {
                debug!("Skipping jiggle: {}", e);
                return None;
            }
        };

        match self.pointer.origin() {
            Origin::TopLeft => Some(location),
            Origin::BottomLeft => match self.pointer.display_height() {
                Ok(height) => Some(Position::new(location.x, height - location.y)),
                Err(e) => {
                    debug!("Skipping jiggle, no display: {}", e);
                    None
                }
            },
        }
    }

    /// Move the pointer away, then schedule the move back.
    ///
    /// Must be called from within a tokio runtime. Returns the handle of the
    /// pending move back, or `None` if nothing was injected.
    pub fn fire(&self) -> Option<JoinHandle<()>> {
        let original = self.current_position()?;
        let target = original.offset_x(self.distance);

        if let Err(e) = self.pointer.move_to(target) {
            warn!("Skipping jiggle: {}", e);
            return None;
        }
        self.fired.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Moved pointer to ({}, {}), moving back in {:?}",
            target.x, target.y, self.delay
        );

        let pointer = Arc::clone(&self.pointer);
        let delay = self.delay;
        Some(tokio::spawn(async move {
            sleep(delay).await;
            if let Err(e) = pointer.move_to(original) {
                warn!("Failed to move pointer back: {}", e);
            }
        }))
    }
}
