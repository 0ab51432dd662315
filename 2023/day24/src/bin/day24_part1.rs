use anyhow::{Context, Result};
use clap::Parser;
use day24::Part1CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = Part1CLIArgs::parse();
    let stones = day24::read_hailstones(&args.input_path).with_context(|| {
        format!(
            "Failed to read hailstones from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of hailstone pairs crossing within test area({}..={}) is {}.",
        args.area_min,
        args.area_max,
        day24::crossing_pair_n(&stones, args.area_min as i128, args.area_max as i128)
    );

    Ok(())
}
