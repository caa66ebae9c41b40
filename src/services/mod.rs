//! Platform services module
//!
//! This module contains the pointer backends and the jiggler that drives them.

pub mod jiggler;
pub mod pointer;

// Re-export main types
pub use jiggler::Jiggler;
pub use pointer::{EnigoPointer, NoopPointer, PointerDevice, PointerError, Position};
