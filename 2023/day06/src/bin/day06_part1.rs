use anyhow::{Context, Result};
use clap::Parser;
use day06::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let races = day06::read_races(&args.input_path).with_context(|| {
        format!(
            "Failed to read races from given file({}).",
            args.input_path.display()
        )
    })?;

    let product = races.iter().map(|r| r.win_ways()).product::<u64>();
    println!(
        "The product of the numbers of ways to beat the record in each race is {}.",
        product
    );

    Ok(())
}
