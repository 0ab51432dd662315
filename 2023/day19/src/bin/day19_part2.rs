use anyhow::{Context, Result};
use clap::Parser;
use day19::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let system = day19::read_system(&args.input_path).with_context(|| {
        format!(
            "Failed to read workflows and parts from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of distinct rating combinations accepted is {}.",
        system.accepted_combination_n(1..4001)?
    );

    Ok(())
}
