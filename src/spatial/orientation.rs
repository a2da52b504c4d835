//! Square symmetries, border sides, and edge signatures
//!
//! An orientation is one of the eight symmetries of the square: four quarter
//! turns, optionally preceded by a horizontal flip. Both the assembler and the
//! pattern scanner enumerate orientations in the same fixed order, so a match
//! found by either refers to the same transform.

use bitvec::prelude::BitVec;

/// Ordered sequence of pixel values read along one border of a grid
///
/// Two signatures denote the same physical edge if they are equal as
/// sequences or equal when one of them is reversed, since adjacent tiles
/// may be mirrored relative to each other.
pub type EdgeSignature = BitVec;

/// Reverse an edge signature
///
/// Reversing twice yields the original signature.
pub fn reversed(signature: &EdgeSignature) -> EdgeSignature {
    signature.iter().by_vals().rev().collect()
}

/// One of the eight rotation/flip symmetries of a square grid
///
/// The transform mirrors the columns first when `flipped` is set, then
/// rotates clockwise by `quarter_turns` quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Number of clockwise quarter turns (0..4)
    pub quarter_turns: u8,
    /// Whether the grid is mirrored horizontally before rotating
    pub flipped: bool,
}

impl Orientation {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        quarter_turns: 0,
        flipped: false,
    };

    /// All eight orientations in the fixed enumeration order
    ///
    /// Four rotations first, then the flip, then four more rotations. The
    /// assembler accepts the first entry that satisfies a cell's border
    /// requirements, so this order is part of the placement contract.
    pub const ALL: [Self; 8] = [
        Self {
            quarter_turns: 0,
            flipped: false,
        },
        Self {
            quarter_turns: 1,
            flipped: false,
        },
        Self {
            quarter_turns: 2,
            flipped: false,
        },
        Self {
            quarter_turns: 3,
            flipped: false,
        },
        Self {
            quarter_turns: 0,
            flipped: true,
        },
        Self {
            quarter_turns: 1,
            flipped: true,
        },
        Self {
            quarter_turns: 2,
            flipped: true,
        },
        Self {
            quarter_turns: 3,
            flipped: true,
        },
    ];
}

/// One of the four borders of a grid
///
/// `Top` and `Bottom` signatures read left to right; `Left` and `Right`
/// signatures read top to bottom. Facing borders of physically adjacent
/// tiles therefore compare equal without reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row, read left to right
    Top,
    /// Last row, read left to right
    Bottom,
    /// First column, read top to bottom
    Left,
    /// Last column, read top to bottom
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::{Lsb0, bitvec};

    #[test]
    fn test_all_orientations_are_distinct() {
        for (i, a) in Orientation::ALL.iter().enumerate() {
            for (j, b) in Orientation::ALL.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn test_enumeration_order_rotates_then_flips() {
        let unflipped = Orientation::ALL.iter().take(4).filter(|o| !o.flipped);
        assert_eq!(unflipped.count(), 4);
        let flipped = Orientation::ALL.iter().skip(4).filter(|o| o.flipped);
        assert_eq!(flipped.count(), 4);
    }

    #[test]
    fn test_reversing_twice_is_identity() {
        let signature: EdgeSignature = bitvec![1, 0, 0, 1, 1, 0, 1, 0, 0, 0];
        assert_eq!(reversed(&reversed(&signature)), signature);
        assert_ne!(reversed(&signature), signature);
    }
}
