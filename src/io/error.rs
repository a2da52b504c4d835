//! Error types for parsing, classification, and assembly
//!
//! Every error is terminal for the run: the computation is a one-shot batch
//! transform over a fixed input, so the caller surfaces the error and aborts
//! rather than producing a partial result.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reassembly operations
#[derive(Debug)]
pub enum StitchError {
    /// A tile block in the input could not be parsed
    TileParse {
        /// Zero-based index of the offending block in the input
        block: usize,
        /// Description of what is wrong with the block
        reason: String,
    },

    /// Two tile blocks carry the same identifier
    DuplicateTile {
        /// The repeated tile identifier
        id: u64,
    },

    /// A tile's pixel grid is not square
    NonSquareTile {
        /// Identifier of the offending tile
        id: u64,
        /// Number of pixel rows found
        rows: usize,
        /// Number of pixel columns found
        cols: usize,
    },

    /// A tile's side length differs from the rest of the catalog
    InconsistentTileSize {
        /// Identifier of the offending tile
        id: u64,
        /// Side length established by earlier tiles
        expected: usize,
        /// Side length of this tile
        found: usize,
    },

    /// The pattern template is unusable
    MalformedPattern {
        /// Description of what is wrong with the template
        reason: String,
    },

    /// The tile count does not admit a square macro grid
    TileCountNotSquare {
        /// Number of tiles in the catalog
        count: usize,
    },

    /// Classified pool sizes are inconsistent with the macro grid dimension
    PoolImbalance {
        /// Name of the offending pool
        pool: &'static str,
        /// Pool size required for the computed grid dimension
        expected: usize,
        /// Pool size actually produced by classification
        found: usize,
    },

    /// A macro grid cell exhausted its candidate pool without a fit
    ///
    /// Signals an ill-formed or non-unique puzzle instance; placement is
    /// greedy and never backtracks across cells.
    Placement {
        /// Macro grid column of the cell
        x: usize,
        /// Macro grid row of the cell
        y: usize,
        /// Name of the pool that was exhausted
        pool: &'static str,
    },

    /// A grid computation produced an impossible shape
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileParse { block, reason } => {
                write!(f, "Malformed tile block {block}: {reason}")
            }
            Self::DuplicateTile { id } => {
                write!(f, "Duplicate tile id {id}")
            }
            Self::NonSquareTile { id, rows, cols } => {
                write!(f, "Tile {id} is not square ({rows} rows, {cols} columns)")
            }
            Self::InconsistentTileSize {
                id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {id} has side length {found}, expected {expected} like the rest of the catalog"
                )
            }
            Self::MalformedPattern { reason } => {
                write!(f, "Malformed pattern template: {reason}")
            }
            Self::TileCountNotSquare { count } => {
                write!(
                    f,
                    "Tile count {count} is not the square of a grid dimension of at least 2"
                )
            }
            Self::PoolImbalance {
                pool,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Classification produced {found} {pool} tiles, expected {expected}"
                )
            }
            Self::Placement { x, y, pool } => {
                write!(
                    f,
                    "No tile in the {pool} pool fits macro grid cell ({x}, {y}) in any orientation"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for reassembly results
pub type Result<T> = std::result::Result<T, StitchError>;

/// Create a tile parse error for the given input block
pub fn tile_parse_error(block: usize, reason: &impl ToString) -> StitchError {
    StitchError::TileParse {
        block,
        reason: reason.to_string(),
    }
}

/// Create a malformed pattern template error
pub fn pattern_error(reason: &impl ToString) -> StitchError {
    StitchError::MalformedPattern {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> StitchError {
    StitchError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = StitchError::Placement {
            x: 2,
            y: 0,
            pool: "edge",
        };
        let message = err.to_string();
        assert!(message.contains("(2, 0)"));
        assert!(message.contains("edge"));
    }

    #[test]
    fn test_filesystem_error_exposes_source() {
        let err = StitchError::FileSystem {
            path: PathBuf::from("tiles.txt"),
            operation: "read",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("tiles.txt"));
    }
}
