use anyhow::{Context, Result};
use clap::Parser;
use day05::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let almanac = day05::read_almanac(&args.input_path).with_context(|| {
        format!(
            "Failed to read almanac from given file({}).",
            args.input_path.display()
        )
    })?;

    let seed_ranges = almanac.seed_ranges()?;
    if let Some(location) = almanac
        .location_ranges(seed_ranges)
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| r.start)
        .min()
    {
        println!(
            "The lowest location number corresponding to any seed range is {}.",
            location
        );
    } else {
        eprintln!("There's no seed range in given almanac.");
    }

    Ok(())
}
