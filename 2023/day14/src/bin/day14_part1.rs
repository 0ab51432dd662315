use advent::Direction;
use anyhow::{Context, Result};
use clap::Parser;
use day14::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let mut platform = day14::read_platform(&args.input_path).with_context(|| {
        format!(
            "Failed to read platform from given file({}).",
            args.input_path.display()
        )
    })?;

    platform.tilt(Direction::North);
    println!(
        "The total load on the north support beams after tilting north is {}.",
        platform.north_load()
    );

    Ok(())
}
