use advent::{Direction, Position};
use anyhow::{Context, Result};
use clap::Parser;
use day16::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let contraption = day16::read_contraption(&args.input_path).with_context(|| {
        format!(
            "Failed to read contraption from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of energized tiles with beam from top-left heading right is {}.",
        contraption.energized_n(Position::new(0, 0), Direction::East)
    );

    Ok(())
}
