//! CLI entry point for the world generator

use clap::Parser;
use worldgen::io::cli::{Cli, FileProcessor};

fn main() -> worldgen::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
