use anyhow::{Context, Result};
use clap::Parser;
use day02::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let games = day02::read_games(&args.input_path).with_context(|| {
        format!(
            "Failed to read games from given file({}).",
            args.input_path.display()
        )
    })?;

    let power_sum = games.iter().map(|g| g.min_bag().power()).sum::<usize>();
    println!(
        "The sum of powers of the minimum cube sets is {}.",
        power_sum
    );

    Ok(())
}
