//! Edge-matching reassembly of shuffled square image tiles
//!
//! The system parses a catalog of square pixel tiles whose true positions and
//! orientations are unknown, classifies tiles by how many of their borders are
//! globally unique, places every tile into a macro grid by border agreement,
//! stitches the placed tiles into one continuous image, and scans the result
//! for a fixed pixel pattern across all eight orientations.

#![deny(unsafe_code)]

/// Core algorithm implementation including edge classification, grid assembly, merging, and scanning
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel grid representation, orientations, and edge signatures
pub mod spatial;

pub use io::error::{Result, StitchError};
