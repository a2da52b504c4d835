//! Oriented pattern matching and the roughness metric
//!
//! The merged image is scanned in all eight orientations, using the same
//! enumeration order as the assembler. Only one orientation is expected to
//! show the pattern; ties resolve by taking the maximum count, not the
//! first. Overlapping instances are counted independently even when they
//! share SET pixels, matching the established behavior of the metric.

use crate::io::monster::SeaMonster;
use crate::spatial::PixelGrid;
use crate::spatial::orientation::Orientation;

/// Count pattern instances in one fixed orientation
///
/// Every anchor position whose bounding box fits inside the image is
/// tested; an anchor matches when all pattern offsets map to SET pixels.
pub fn count_monsters(image: &PixelGrid, monster: &SeaMonster) -> usize {
    let (rows, cols) = (image.rows(), image.cols());
    if rows < monster.height() || cols < monster.width() {
        return 0;
    }

    let mut found = 0;
    for row in 0..=(rows - monster.height()) {
        for col in 0..=(cols - monster.width()) {
            let matches = monster
                .offsets()
                .iter()
                .all(|&(dx, dy)| image.get(row + dy, col + dx));
            if matches {
                found += 1;
            }
        }
    }
    found
}

/// Best pattern count over all eight orientations of the image
pub fn scan(image: &PixelGrid, monster: &SeaMonster) -> usize {
    Orientation::ALL
        .iter()
        .map(|&orientation| count_monsters(&image.oriented(orientation), monster))
        .max()
        .unwrap_or(0)
}

/// Roughness scalar: SET pixels not attributable to pattern instances
///
/// The SET-pixel total is orientation-invariant, so the image may be passed
/// in any orientation. Saturates at zero if overlapping instances claim
/// more pixels than exist.
pub fn roughness(image: &PixelGrid, monster: &SeaMonster, max_monsters: usize) -> usize {
    image
        .count_set()
        .saturating_sub(max_monsters * monster.set_pixels())
}
