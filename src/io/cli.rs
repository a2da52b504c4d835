//! Command-line interface for reassembling a tile set and scanning it
//!
//! The run is a single finite batch computation: parse the catalog, print
//! the corner-id product, assemble and merge the image, then print the
//! roughness scalar. Two integers on standard output are the only writes.

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::assembler::assemble;
use crate::algorithm::classifier::{EdgeLookup, classify};
use crate::algorithm::merge::{merge, trim};
use crate::algorithm::scanner::{roughness, scan};
use crate::io::error::Result;
use crate::io::monster::SeaMonster;
use crate::io::tileset::TileSet;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble shuffled image tiles by border agreement and scan for sea monsters"
)]
/// Command-line arguments for the reassembly tool
pub struct Cli {
    /// Tile set input file
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Pattern template file (built-in sea monster when omitted)
    #[arg(short, long)]
    pub monster: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the full reassembly pipeline for one tile set
pub struct PuzzleProcessor {
    cli: Cli,
}

impl PuzzleProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse inputs, assemble the image, and print both result integers
    ///
    /// # Errors
    ///
    /// Returns an error if either input fails to parse, the tile count does
    /// not form a square grid, classification pools are imbalanced, or a
    /// grid cell cannot be filled.
    // Result integers go to stdout by contract; progress notes go to stderr
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let tiles = TileSet::from_file(&self.cli.tiles)?;
        let monster = match &self.cli.monster {
            Some(path) => SeaMonster::from_file(path)?,
            None => SeaMonster::builtin()?,
        };

        if self.cli.should_show_progress() {
            eprintln!(
                "Parsed {} tiles of side {} from {}",
                tiles.len(),
                tiles.side(),
                self.cli.tiles.display()
            );
        }

        let lookup = EdgeLookup::build(&tiles);
        let classification = classify(&lookup, &tiles)?;
        println!("{}", classification.pools.corner_product());

        let assembled = assemble(&tiles, &classification)?;
        let image = merge(&trim(&assembled))?;

        if self.cli.should_show_progress() {
            eprintln!(
                "Assembled {}x{} image, scanning for {}-pixel pattern",
                image.rows(),
                image.cols(),
                monster.set_pixels()
            );
        }

        let monsters = scan(&image, &monster);
        println!("{}", roughness(&image, &monster, monsters));

        Ok(())
    }
}
