//! Owned pixel grid with pure orientation, trim, and border operations
//!
//! Grids are two-valued (SET/CLEAR) and immutable once constructed. Every
//! transform returns a new grid; orientation is applied by index remapping in
//! a single pass rather than by chaining destructive rotations, so the eight
//! symmetries can be enumerated cheaply and tested in isolation.

use ndarray::{Array2, s};

use crate::spatial::orientation::{EdgeSignature, Orientation, Side};

/// A rectangular grid of SET/CLEAR pixels
///
/// Tile catalog entries are square; the merged image produced by the merger
/// is also square, but the type itself supports any rectangle so oriented
/// pattern scans work on arbitrary dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Array2<bool>,
}

impl PixelGrid {
    /// Wrap an owned cell array
    pub const fn new(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Borrow the underlying cell array
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Pixel value at (row, col); out-of-bounds reads are CLEAR
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Count of SET pixels in the whole grid
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&pixel| pixel).count()
    }

    /// Apply one of the eight square symmetries, yielding a new grid
    ///
    /// The output is built by remapping indices: each output cell reads the
    /// source cell obtained by inverting the rotation, then undoing the
    /// horizontal flip. A quarter turn of a rectangle swaps the dimensions.
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let (rows, cols) = self.cells.dim();
        let swapped = orientation.quarter_turns % 2 == 1;
        let out_dim = if swapped { (cols, rows) } else { (rows, cols) };

        let cells = Array2::from_shape_fn(out_dim, |(row, col)| {
            let (src_row, src_col) = match orientation.quarter_turns % 4 {
                0 => (row, col),
                1 => (rows - 1 - col, row),
                2 => (rows - 1 - row, cols - 1 - col),
                _ => (col, cols - 1 - row),
            };
            let src_col = if orientation.flipped {
                cols - 1 - src_col
            } else {
                src_col
            };
            self.get(src_row, src_col)
        });

        Self { cells }
    }

    /// Read the border signature along one side
    ///
    /// Signature length equals the grid dimension along that side. Top and
    /// bottom read left to right, left and right read top to bottom.
    pub fn edge(&self, side: Side) -> EdgeSignature {
        let (rows, cols) = self.cells.dim();
        let border = match side {
            Side::Top => self.cells.row(0),
            Side::Bottom => self.cells.row(rows - 1),
            Side::Left => self.cells.column(0),
            Side::Right => self.cells.column(cols - 1),
        };
        border.iter().copied().collect()
    }

    /// Remove the outermost ring of pixels, yielding a new grid
    ///
    /// The ring exists solely to encode adjacency between tiles and carries
    /// no image content.
    pub fn trimmed(&self) -> Self {
        Self {
            cells: self.cells.slice(s![1..-1, 1..-1]).to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::orientation::reversed;

    fn sample_grid() -> PixelGrid {
        // 3x4 grid with a single SET pixel at (0, 1) and one at (2, 3)
        let mut cells = Array2::from_elem((3, 4), false);
        if let Some(pixel) = cells.get_mut((0, 1)) {
            *pixel = true;
        }
        if let Some(pixel) = cells.get_mut((2, 3)) {
            *pixel = true;
        }
        PixelGrid::new(cells)
    }

    #[test]
    fn test_identity_orientation_is_noop() {
        let grid = sample_grid();
        assert_eq!(grid.oriented(Orientation::IDENTITY), grid);
    }

    #[test]
    fn test_quarter_turn_moves_pixels_clockwise() {
        let grid = sample_grid();
        let turned = grid.oriented(Orientation {
            quarter_turns: 1,
            flipped: false,
        });
        assert_eq!((turned.rows(), turned.cols()), (4, 3));
        // (0, 1) in a 3-row grid lands at (1, 2) after a clockwise turn
        assert!(turned.get(1, 2));
        assert!(turned.get(3, 0));
        assert_eq!(turned.count_set(), 2);
    }

    #[test]
    fn test_two_quarter_turns_equal_half_turn() {
        let grid = sample_grid();
        let once = Orientation {
            quarter_turns: 1,
            flipped: false,
        };
        let twice = grid.oriented(once).oriented(once);
        let half = grid.oriented(Orientation {
            quarter_turns: 2,
            flipped: false,
        });
        assert_eq!(twice, half);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let grid = sample_grid();
        let flip = Orientation {
            quarter_turns: 0,
            flipped: true,
        };
        assert_eq!(grid.oriented(flip).oriented(flip), grid);
    }

    #[test]
    fn test_edge_lengths_match_dimensions() {
        let grid = sample_grid();
        assert_eq!(grid.edge(Side::Top).len(), 4);
        assert_eq!(grid.edge(Side::Bottom).len(), 4);
        assert_eq!(grid.edge(Side::Left).len(), 3);
        assert_eq!(grid.edge(Side::Right).len(), 3);
    }

    #[test]
    fn test_flip_reverses_horizontal_edges() {
        let grid = sample_grid();
        let flipped = grid.oriented(Orientation {
            quarter_turns: 0,
            flipped: true,
        });
        assert_eq!(flipped.edge(Side::Top), reversed(&grid.edge(Side::Top)));
        assert_eq!(
            flipped.edge(Side::Bottom),
            reversed(&grid.edge(Side::Bottom))
        );
    }

    #[test]
    fn test_trim_removes_one_pixel_ring() {
        let grid = PixelGrid::new(Array2::from_elem((5, 5), true));
        let trimmed = grid.trimmed();
        assert_eq!((trimmed.rows(), trimmed.cols()), (3, 3));
        assert_eq!(trimmed.count_set(), 9);
    }
}
