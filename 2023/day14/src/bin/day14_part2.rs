use anyhow::{Context, Result};
use clap::Parser;
use day14::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let platform = day14::read_platform(&args.input_path).with_context(|| {
        format!(
            "Failed to read platform from given file({}).",
            args.input_path.display()
        )
    })?;

    let cycle_n = 1_000_000_000;
    println!(
        "The total load on the north support beams after {} spin cycles is {}.",
        cycle_n,
        platform.spun(cycle_n).north_load()
    );

    Ok(())
}
