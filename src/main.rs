//! CLI entry point for the dungeon tile generator

use clap::Parser;
use dungeontile::io::cli::{self, Cli};
use dungeontile::io::logging;
use std::io::Write;

fn main() -> dungeontile::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::parse_level(&cli.log_level)?);

    let grid = cli::run(&cli)?;

    if cli.should_print_ascii() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(grid.to_ascii().as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}
