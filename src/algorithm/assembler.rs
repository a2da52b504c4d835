//! Greedy tile placement into the macro grid
//!
//! Cells are filled left to right, top to bottom. Each cell derives border
//! requirements from its position and its already-placed neighbors, draws
//! candidates from the matching pool, and accepts the first of the eight
//! orientations that satisfies every requirement. Placement never backtracks
//! across cells: the algorithm assumes the puzzle has exactly one
//! edge-consistent assignment, so a well-formed input always yields a match
//! before the pool empties. When it does not, assembly fails fast.

use std::collections::{HashSet, VecDeque};

use crate::algorithm::classifier::{Classification, PoolKind};
use crate::io::error::{Result, StitchError};
use crate::io::tileset::TileSet;
use crate::spatial::PixelGrid;
use crate::spatial::orientation::{EdgeSignature, Orientation, Side};

/// Row-major arrangement of placed, oriented tiles
pub type MacroGrid = Vec<Vec<PixelGrid>>;

/// Constraint on one side of a macro grid cell
#[derive(Debug, Clone)]
enum BorderRule {
    /// The side lies on the macro grid border and must expose an outer edge
    Outer,
    /// The side must equal (not reversed) the facing edge of a placed neighbor
    Match(EdgeSignature),
    /// The side will be satisfied later by a not-yet-placed neighbor
    Free,
}

impl BorderRule {
    fn accepts(&self, signature: &EdgeSignature, outer_edges: &HashSet<EdgeSignature>) -> bool {
        match self {
            Self::Outer => outer_edges.contains(signature),
            Self::Match(expected) => signature == expected,
            Self::Free => true,
        }
    }
}

/// Border requirements for the cell currently being filled
#[derive(Debug, Clone)]
struct CellRequirements {
    top: BorderRule,
    bottom: BorderRule,
    left: BorderRule,
    right: BorderRule,
}

impl CellRequirements {
    fn satisfied_by(&self, candidate: &PixelGrid, outer_edges: &HashSet<EdgeSignature>) -> bool {
        self.top.accepts(&candidate.edge(Side::Top), outer_edges)
            && self
                .bottom
                .accepts(&candidate.edge(Side::Bottom), outer_edges)
            && self.left.accepts(&candidate.edge(Side::Left), outer_edges)
            && self.right.accepts(&candidate.edge(Side::Right), outer_edges)
    }
}

/// Which pool a cell draws from, by how many of its sides sit on the border
const fn cell_pool(x: usize, y: usize, dimension: usize) -> PoolKind {
    let horizontal_border = x == 0 || x == dimension - 1;
    let vertical_border = y == 0 || y == dimension - 1;
    match (horizontal_border, vertical_border) {
        (true, true) => PoolKind::Corners,
        (false, false) => PoolKind::Insides,
        _ => PoolKind::Edges,
    }
}

/// Place every tile into the macro grid
///
/// The classification's pools are cloned and consumed destructively; a tile,
/// once placed, is removed from its pool and never reconsidered. Candidates
/// that fit no orientation of the current cell stay available for later
/// cells.
///
/// # Errors
///
/// Returns an error if the tile count does not form a square grid or a cell
/// exhausts its candidate pool without a satisfying orientation.
pub fn assemble(tiles: &TileSet, classification: &Classification) -> Result<MacroGrid> {
    let dimension = crate::algorithm::classifier::macro_dimension(tiles.len())?;
    let mut pools = classification.pools.clone();
    let mut placed: MacroGrid = Vec::with_capacity(dimension);

    for y in 0..dimension {
        let mut row: Vec<PixelGrid> = Vec::with_capacity(dimension);
        for x in 0..dimension {
            let requirements = derive_requirements(x, y, dimension, &placed, &row);
            let kind = cell_pool(x, y, dimension);
            let oriented = fill_cell(
                tiles,
                &classification.outer_edges,
                pools.pool_mut(kind),
                &requirements,
            )
            .ok_or(StitchError::Placement {
                x,
                y,
                pool: kind.name(),
            })?;
            row.push(oriented);
        }
        placed.push(row);
    }

    Ok(placed)
}

/// Derive the four border rules for cell (x, y)
///
/// First-row cells have no top neighbor, so the top requirement becomes
/// outer; first-column cells likewise for the left. Bottom and right face
/// not-yet-placed neighbors and are only constrained on the grid border.
fn derive_requirements(
    x: usize,
    y: usize,
    dimension: usize,
    placed: &MacroGrid,
    current_row: &[PixelGrid],
) -> CellRequirements {
    let top = placed
        .last()
        .and_then(|previous_row| previous_row.get(x))
        .map_or(BorderRule::Outer, |neighbor| {
            BorderRule::Match(neighbor.edge(Side::Bottom))
        });
    let left = current_row.last().map_or(BorderRule::Outer, |neighbor| {
        BorderRule::Match(neighbor.edge(Side::Right))
    });
    let bottom = if y == dimension - 1 {
        BorderRule::Outer
    } else {
        BorderRule::Free
    };
    let right = if x == dimension - 1 {
        BorderRule::Outer
    } else {
        BorderRule::Free
    };

    CellRequirements {
        top,
        bottom,
        left,
        right,
    }
}

/// Scan the pool in insertion order, trying all eight orientations per id
///
/// Accepts the first orientation satisfying every rule and removes the id
/// from the pool. Returns `None` when the pool is exhausted.
fn fill_cell(
    tiles: &TileSet,
    outer_edges: &HashSet<EdgeSignature>,
    pool: &mut VecDeque<u64>,
    requirements: &CellRequirements,
) -> Option<PixelGrid> {
    for index in 0..pool.len() {
        let id = pool.get(index).copied()?;
        let Some(grid) = tiles.get(id) else {
            continue;
        };

        for orientation in Orientation::ALL {
            let candidate = grid.oriented(orientation);
            if requirements.satisfied_by(&candidate, outer_edges) {
                let _ = pool.remove(index);
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_pool_selection() {
        assert_eq!(cell_pool(0, 0, 3), PoolKind::Corners);
        assert_eq!(cell_pool(2, 2, 3), PoolKind::Corners);
        assert_eq!(cell_pool(1, 0, 3), PoolKind::Edges);
        assert_eq!(cell_pool(0, 1, 3), PoolKind::Edges);
        assert_eq!(cell_pool(1, 1, 3), PoolKind::Insides);
        // A 2x2 grid is all corners
        assert_eq!(cell_pool(0, 1, 2), PoolKind::Corners);
        assert_eq!(cell_pool(1, 1, 2), PoolKind::Corners);
    }
}
