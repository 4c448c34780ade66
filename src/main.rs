//! CLI entry point for the sheet tile extraction tool

use clap::Parser;
use sheetsplit::io::cli::{Cli, SheetProcessor};

fn main() -> sheetsplit::Result<()> {
    let cli = Cli::parse();
    let processor = SheetProcessor::new(cli);
    processor.process()
}
