//! CLI entry point for the tile reassembly and pattern scanning tool

use clap::Parser;
use tilestitch::io::cli::{Cli, PuzzleProcessor};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let processor = PuzzleProcessor::new(cli);
    processor.process()
}
