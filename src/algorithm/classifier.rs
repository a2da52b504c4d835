//! Edge uniqueness classification and tile pool partitioning
//!
//! For every tile the lookup records the top border signature of each of its
//! four rotations, under both the forward and the reversed reading. A
//! signature held by exactly one tile has no partner anywhere in the set and
//! marks the physical border of the assembled image. Tiles are partitioned
//! into corner, edge, and inside pools by how many such unpartnered
//! signatures they carry.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::io::error::{Result, StitchError};
use crate::io::tileset::TileSet;
use crate::spatial::orientation::{EdgeSignature, Orientation, Side, reversed};

/// Mapping from border signature to the tiles exposing it in some orientation
///
/// Each captured signature is inserted under both its forward and reversed
/// form, so lookups are insensitive to reading direction.
#[derive(Debug, Clone, Default)]
pub struct EdgeLookup {
    by_signature: HashMap<EdgeSignature, Vec<u64>>,
}

impl EdgeLookup {
    /// Build the lookup from the original, unrotated catalog
    ///
    /// Rotating through the four rotations of a tile and reading the top
    /// border each time captures all four distinct border signatures.
    pub fn build(tiles: &TileSet) -> Self {
        let mut by_signature: HashMap<EdgeSignature, Vec<u64>> = HashMap::new();

        for (id, grid) in tiles.entries() {
            for quarter_turns in 0..4 {
                let rotated = grid.oriented(Orientation {
                    quarter_turns,
                    flipped: false,
                });
                let signature = rotated.edge(Side::Top);
                let mirrored = reversed(&signature);
                by_signature.entry(signature).or_default().push(id);
                by_signature.entry(mirrored).or_default().push(id);
            }
        }

        Self { by_signature }
    }

    /// Iterate over (signature, tile ids) entries
    pub fn entries(&self) -> impl Iterator<Item = (&EdgeSignature, &[u64])> {
        self.by_signature
            .iter()
            .map(|(signature, ids)| (signature, ids.as_slice()))
    }

    /// Number of distinct signature keys recorded
    pub fn len(&self) -> usize {
        self.by_signature.len()
    }

    /// Whether the lookup is empty
    pub fn is_empty(&self) -> bool {
        self.by_signature.is_empty()
    }
}

/// Which of the three disjoint tile pools a cell draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Tiles with more than two unpartnered borders
    Corners,
    /// Tiles with exactly two unpartnered borders
    Edges,
    /// Tiles with no unpartnered border
    Insides,
}

impl PoolKind {
    /// Human-readable pool name for diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Corners => "corner",
            Self::Edges => "edge",
            Self::Insides => "inside",
        }
    }
}

/// Three disjoint pools of tile ids partitioning the catalog
///
/// Pool order is ascending by id regardless of input ordering. The
/// assembler consumes ids destructively from its own clone.
#[derive(Debug, Clone, Default)]
pub struct TilePools {
    corners: VecDeque<u64>,
    edges: VecDeque<u64>,
    insides: VecDeque<u64>,
}

impl TilePools {
    /// Borrow one pool
    pub const fn pool(&self, kind: PoolKind) -> &VecDeque<u64> {
        match kind {
            PoolKind::Corners => &self.corners,
            PoolKind::Edges => &self.edges,
            PoolKind::Insides => &self.insides,
        }
    }

    /// Mutably borrow one pool
    pub const fn pool_mut(&mut self, kind: PoolKind) -> &mut VecDeque<u64> {
        match kind {
            PoolKind::Corners => &mut self.corners,
            PoolKind::Edges => &mut self.edges,
            PoolKind::Insides => &mut self.insides,
        }
    }

    /// Product of the four corner tile ids
    ///
    /// A checksum proving correct classification, independent of assembly.
    pub fn corner_product(&self) -> u64 {
        self.corners.iter().product()
    }
}

/// Result of classifying a tile catalog
#[derive(Debug, Clone)]
pub struct Classification {
    /// Signatures that appear on exactly one tile, in both readings
    pub outer_edges: HashSet<EdgeSignature>,
    /// Corner, edge, and inside pools partitioning the id set
    pub pools: TilePools,
}

/// Compute the macro grid dimension from the tile count
///
/// # Errors
///
/// Returns an error if the count is not the square of a dimension of at
/// least 2.
pub fn macro_dimension(count: usize) -> Result<usize> {
    let dimension = count.isqrt();
    if dimension < 2 || dimension * dimension != count {
        return Err(StitchError::TileCountNotSquare { count });
    }
    Ok(dimension)
}

/// Partition tiles into pools by unpartnered-border tally
///
/// A tile with exactly two unpartnered borders sits on the image border, one
/// with more than two (four in practice, from the mirrored readings) is a
/// corner, and one with none is inside.
///
/// # Errors
///
/// Returns an error if the tile count is not a perfect square or the pool
/// sizes are inconsistent with the expected corner/edge/inside counts for
/// the computed grid dimension.
pub fn classify(lookup: &EdgeLookup, tiles: &TileSet) -> Result<Classification> {
    let dimension = macro_dimension(tiles.len())?;

    let mut tally: BTreeMap<u64, usize> = BTreeMap::new();
    let mut outer_edges = HashSet::new();

    for (signature, ids) in lookup.entries() {
        if let [only] = ids {
            outer_edges.insert(signature.clone());
            *tally.entry(*only).or_insert(0) += 1;
        }
    }

    let mut pools = TilePools::default();
    for id in tiles.ids() {
        let unpartnered = tally.get(&id).copied().unwrap_or(0);
        let kind = match unpartnered {
            2 => PoolKind::Edges,
            n if n > 2 => PoolKind::Corners,
            _ => PoolKind::Insides,
        };
        pools.pool_mut(kind).push_back(id);
    }

    let interior = dimension - 2;
    let expectations = [
        (PoolKind::Corners, 4),
        (PoolKind::Edges, 4 * interior),
        (PoolKind::Insides, interior * interior),
    ];
    for (kind, expected) in expectations {
        let found = pools.pool(kind).len();
        if found != expected {
            return Err(StitchError::PoolImbalance {
                pool: kind.name(),
                expected,
                found,
            });
        }
    }

    Ok(Classification { outer_edges, pools })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_dimension_of_perfect_squares() {
        assert!(matches!(macro_dimension(4), Ok(2)));
        assert!(matches!(macro_dimension(9), Ok(3)));
        assert!(matches!(macro_dimension(144), Ok(12)));
    }

    #[test]
    fn test_macro_dimension_rejects_non_squares() {
        assert!(matches!(
            macro_dimension(5),
            Err(StitchError::TileCountNotSquare { count: 5 })
        ));
        assert!(matches!(
            macro_dimension(1),
            Err(StitchError::TileCountNotSquare { count: 1 })
        ));
        assert!(matches!(
            macro_dimension(0),
            Err(StitchError::TileCountNotSquare { count: 0 })
        ));
    }

    #[test]
    fn test_lookup_records_eight_keys_per_tile() {
        // Borders chosen pairwise distinct under reversal and non-palindromic
        let input = "Tile 3:\n#...\n#..#\n...#\n.#.#";
        let tiles = match TileSet::parse(input) {
            Ok(tiles) => tiles,
            Err(err) => unreachable!("catalog rejected: {err}"),
        };
        let lookup = EdgeLookup::build(&tiles);
        // Four borders, each under forward and reversed keys, none palindromic
        // and none equal to another, so all eight keys are distinct
        assert_eq!(lookup.len(), 8);
        for (_, ids) in lookup.entries() {
            assert_eq!(ids, [3]);
        }
    }
}
