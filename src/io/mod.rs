//! Input/output operations and error handling
//!
//! This module contains everything that touches the process boundary:
//! - Command-line interface and run orchestration
//! - Tile catalog and pattern template parsing
//! - The crate-wide error type

/// Command-line interface and run orchestration
pub mod cli;
/// Error types and the crate-wide result alias
pub mod error;
/// Sea monster pattern template parsing
pub mod monster;
/// Tile catalog parsing
pub mod tileset;
