use anyhow::{Context, Result};
use clap::Parser;
use day11::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let image = day11::read_image(&args.input_path).with_context(|| {
        format!(
            "Failed to read galaxy image from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The sum of shortest paths between all pairs of galaxies is {}.",
        image.distance_sum(2)
    );

    Ok(())
}
