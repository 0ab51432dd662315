use anyhow::{Context, Result};
use clap::Parser;
use day16::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let contraption = day16::read_contraption(&args.input_path).with_context(|| {
        format!(
            "Failed to read contraption from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The largest number of energized tiles from any edge entry is {}.",
        contraption.max_energized_n()
    );

    Ok(())
}
