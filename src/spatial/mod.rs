//! Spatial data structures for pixel grids
//!
//! This module contains the pixel-level building blocks:
//! - Owned pixel grid with orientation, trim, and border extraction
//! - The eight square symmetries and the fixed order they are tried in
//! - Edge signatures read along tile borders

/// Pixel grid representation and border extraction
pub mod grid;
/// Square symmetries, border sides, and edge signatures
pub mod orientation;

pub use grid::PixelGrid;
pub use orientation::{EdgeSignature, Orientation, Side};
