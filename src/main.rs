//! CLI entry point for the sprite sheet packer

use clap::Parser;
use spritepack::io::cli::{BatchProcessor, Cli};

fn main() -> spritepack::Result<()> {
    let cli = Cli::parse();
    let processor = BatchProcessor::new(cli);
    processor.process()?;
    Ok(())
}
