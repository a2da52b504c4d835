//! Border trimming and tile concatenation into one image
//!
//! The outermost pixel ring of every placed tile encodes adjacency only, so
//! it is removed before stitching. Trimmed tiles are joined horizontally
//! within each macro grid row, then the row images are joined vertically,
//! yielding a single grid of side M x (L - 2).

use ndarray::{ArrayView2, Axis, concatenate};

use crate::algorithm::assembler::MacroGrid;
use crate::io::error::{Result, computation_error};
use crate::spatial::PixelGrid;

/// Remove the adjacency ring from every placed tile
pub fn trim(grid: &MacroGrid) -> MacroGrid {
    grid.iter()
        .map(|row| row.iter().map(PixelGrid::trimmed).collect())
        .collect()
}

/// Concatenate trimmed tiles into one continuous pixel grid
///
/// # Errors
///
/// Returns an error if the macro grid is empty or the placed tiles disagree
/// on dimensions, which a successful assembly rules out.
pub fn merge(trimmed: &MacroGrid) -> Result<PixelGrid> {
    if trimmed.is_empty() {
        return Err(computation_error("merge", &"macro grid is empty"));
    }

    let mut row_images = Vec::with_capacity(trimmed.len());
    for row in trimmed {
        let views: Vec<ArrayView2<'_, bool>> =
            row.iter().map(|tile| tile.cells().view()).collect();
        let joined = concatenate(Axis(1), &views)
            .map_err(|e| computation_error("merge row", &format!("horizontal join: {e}")))?;
        row_images.push(joined);
    }

    let image_views: Vec<ArrayView2<'_, bool>> =
        row_images.iter().map(|row_image| row_image.view()).collect();
    let image = concatenate(Axis(0), &image_views)
        .map_err(|e| computation_error("merge", &format!("vertical join: {e}")))?;

    Ok(PixelGrid::new(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn solid(side: usize, value: bool) -> PixelGrid {
        PixelGrid::new(Array2::from_elem((side, side), value))
    }

    #[test]
    fn test_merged_side_is_grid_times_trimmed_tile() {
        let grid: MacroGrid = vec![
            vec![solid(4, true), solid(4, false)],
            vec![solid(4, false), solid(4, true)],
        ];
        let image = match merge(&trim(&grid)) {
            Ok(image) => image,
            Err(err) => unreachable!("merge failed: {err}"),
        };
        assert_eq!((image.rows(), image.cols()), (4, 4));
        // Diagonal blocks of the checkerboard stay SET after trimming
        assert_eq!(image.count_set(), 8);
        assert!(image.get(0, 0));
        assert!(!image.get(0, 2));
        assert!(image.get(3, 3));
    }

    #[test]
    fn test_merge_rejects_empty_grid() {
        assert!(merge(&Vec::new()).is_err());
    }
}
