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

    if let Some(location) = almanac.seeds().iter().map(|s| almanac.location(*s)).min() {
        println!(
            "The lowest location number corresponding to any initial seed is {}.",
            location
        );
    } else {
        eprintln!("There's no seed in given almanac.");
    }

    Ok(())
}
