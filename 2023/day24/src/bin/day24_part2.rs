use anyhow::{Context, Result};
use clap::Parser;
use day24::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let stones = day24::read_hailstones(&args.input_path).with_context(|| {
        format!(
            "Failed to read hailstones from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some([x, y, z]) = day24::rock_position(&stones, day24::ROCK_SPEED_LIMIT) {
        println!(
            "The sum of coordinates of the rock's initial position is {}.",
            x + y + z
        );
    } else {
        eprintln!("There's no rock throw hitting every hailstone.");
    }

    Ok(())
}
