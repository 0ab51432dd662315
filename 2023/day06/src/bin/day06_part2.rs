use anyhow::{Context, Result};
use clap::Parser;
use day06::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let race = day06::read_joined_race(&args.input_path).with_context(|| {
        format!(
            "Failed to read the long race from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of ways to beat the record in the long race is {}.",
        race.win_ways()
    );

    Ok(())
}
