use anyhow::{Context, Result};
use clap::Parser;
use day11::Part2CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = Part2CLIArgs::parse();
    let image = day11::read_image(&args.input_path).with_context(|| {
        format!(
            "Failed to read galaxy image from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "With every empty row and column {} times larger, the sum of shortest paths between all pairs of galaxies is {}.",
        args.expansion,
        image.distance_sum(args.expansion)
    );

    Ok(())
}
