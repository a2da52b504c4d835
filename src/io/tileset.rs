//! Tile catalog parsing
//!
//! The tile set input is a sequence of text blocks separated by blank lines.
//! Each block is a labeled header carrying the numeric tile id, followed by L
//! lines of L pixel characters (`#` = SET, `.` = CLEAR). Parsing is pure
//! construction with no side effects; every structural defect maps to a
//! distinct error variant.

use ndarray::Array2;
use std::collections::BTreeMap;
use std::path::Path;

use crate::io::error::{Result, StitchError, tile_parse_error};
use crate::spatial::PixelGrid;

/// Minimum tile side length; a smaller tile has no interior once the
/// adjacency ring is trimmed
const MIN_TILE_SIDE: usize = 3;

/// Immutable catalog of square tiles keyed by identifier
///
/// Iteration order is ascending by id, so everything derived from the
/// catalog is independent of the order tiles appear in the input.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: BTreeMap<u64, PixelGrid>,
    side: usize,
}

impl TileSet {
    /// Parse a tile set from raw input text
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, a block header is malformed,
    /// a pixel character is unrecognized, a grid is ragged or non-square,
    /// tiles disagree on side length, or an id repeats.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.replace('\r', "");
        let trimmed = normalized.trim_end();
        if trimmed.is_empty() {
            return Err(tile_parse_error(0, &"input contains no tile blocks"));
        }

        let mut tiles = BTreeMap::new();
        let mut side = None;

        for (block, text) in trimmed.split("\n\n").enumerate() {
            let (id, grid) = parse_block(block, text)?;

            let grid_side = grid.rows();
            match side {
                None => side = Some(grid_side),
                Some(expected) if expected != grid_side => {
                    return Err(StitchError::InconsistentTileSize {
                        id,
                        expected,
                        found: grid_side,
                    });
                }
                Some(_) => {}
            }

            if tiles.insert(id, grid).is_some() {
                return Err(StitchError::DuplicateTile { id });
            }
        }

        Ok(Self {
            tiles,
            side: side.unwrap_or(0),
        })
    }

    /// Parse a tile set from a file on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content fails
    /// [`Self::parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path_buf).map_err(|e| StitchError::FileSystem {
            path: path_buf,
            operation: "read tile set",
            source: e,
        })?;
        Self::parse(&raw)
    }

    /// Number of tiles in the catalog
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Common side length of every tile
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Look up a tile grid by id
    pub fn get(&self, id: u64) -> Option<&PixelGrid> {
        self.tiles.get(&id)
    }

    /// Iterate over (id, grid) pairs in ascending id order
    pub fn entries(&self) -> impl Iterator<Item = (u64, &PixelGrid)> {
        self.tiles.iter().map(|(&id, grid)| (id, grid))
    }

    /// Iterate over tile ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.tiles.keys().copied()
    }
}

fn parse_block(block: usize, text: &str) -> Result<(u64, PixelGrid)> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| tile_parse_error(block, &"missing header line"))?;

    let id: u64 = header
        .strip_prefix("Tile ")
        .and_then(|rest| rest.strip_suffix(':'))
        .and_then(|digits| digits.trim().parse().ok())
        .ok_or_else(|| tile_parse_error(block, &format!("invalid header '{header}'")))?;

    let mut pixels = Vec::new();
    let mut rows = 0;
    let mut cols = None;

    for line in lines {
        let width = line.chars().count();
        match cols {
            None => cols = Some(width),
            Some(expected) if expected != width => {
                return Err(tile_parse_error(
                    block,
                    &format!("row {rows} has {width} pixels, expected {expected}"),
                ));
            }
            Some(_) => {}
        }

        for character in line.chars() {
            match character {
                '#' => pixels.push(true),
                '.' => pixels.push(false),
                other => {
                    return Err(tile_parse_error(
                        block,
                        &format!("unrecognized pixel character '{other}' in tile {id}"),
                    ));
                }
            }
        }
        rows += 1;
    }

    let cols = cols.unwrap_or(0);
    if rows != cols {
        return Err(StitchError::NonSquareTile { id, rows, cols });
    }
    if rows < MIN_TILE_SIDE {
        return Err(tile_parse_error(
            block,
            &format!("tile {id} side {rows} is below the minimum of {MIN_TILE_SIDE}"),
        ));
    }

    let cells = Array2::from_shape_vec((rows, cols), pixels)
        .map_err(|e| tile_parse_error(block, &format!("tile {id} grid shape: {e}")))?;
    Ok((id, PixelGrid::new(cells)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_TILES: &str = "Tile 7:\n###\n#..\n..#\n\nTile 11:\n..#\n###\n#.#\n";

    #[test]
    fn test_parse_valid_catalog() {
        let tiles = match TileSet::parse(TWO_TILES) {
            Ok(tiles) => tiles,
            Err(err) => unreachable!("valid catalog rejected: {err}"),
        };
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles.side(), 3);
        assert_eq!(tiles.ids().collect::<Vec<_>>(), vec![7, 11]);
        assert!(tiles.get(7).is_some_and(|grid| grid.get(0, 0)));
        assert!(tiles.get(7).is_some_and(|grid| !grid.get(1, 2)));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            TileSet::parse("\n\n"),
            Err(StitchError::TileParse { block: 0, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        assert!(matches!(
            TileSet::parse("Grid 7:\n###\n#..\n..#"),
            Err(StitchError::TileParse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_pixel() {
        assert!(matches!(
            TileSet::parse("Tile 7:\n###\n#x.\n..#"),
            Err(StitchError::TileParse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_square_tile() {
        assert!(matches!(
            TileSet::parse("Tile 7:\n###\n#.#"),
            Err(StitchError::NonSquareTile {
                id: 7,
                rows: 2,
                cols: 3
            })
        ));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!(matches!(
            TileSet::parse("Tile 7:\n###\n#.\n..#"),
            Err(StitchError::TileParse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_id() {
        let input = "Tile 7:\n###\n#..\n..#\n\nTile 7:\n..#\n###\n#.#";
        assert!(matches!(
            TileSet::parse(input),
            Err(StitchError::DuplicateTile { id: 7 })
        ));
    }

    #[test]
    fn test_parse_rejects_inconsistent_side() {
        let input = "Tile 7:\n###\n#..\n..#\n\nTile 11:\n..##\n####\n#.##\n....";
        assert!(matches!(
            TileSet::parse(input),
            Err(StitchError::InconsistentTileSize {
                id: 11,
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = match tempfile::NamedTempFile::new() {
            Ok(file) => file,
            Err(err) => unreachable!("temp file creation failed: {err}"),
        };
        if file.write_all(TWO_TILES.as_bytes()).is_err() {
            unreachable!("temp file write failed");
        }

        let tiles = match TileSet::from_file(file.path()) {
            Ok(tiles) => tiles,
            Err(err) => unreachable!("reading catalog back failed: {err}"),
        };
        assert_eq!(tiles.len(), 2);
    }

    #[test]
    fn test_from_file_missing_path() {
        assert!(matches!(
            TileSet::from_file("definitely/not/here.txt"),
            Err(StitchError::FileSystem { .. })
        ));
    }
}
