use anyhow::{Context, Result};
use clap::Parser;
use day03::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let schematic = day03::read_schematic(&args.input_path).with_context(|| {
        format!(
            "Failed to read engine schematic from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = schematic.gear_ratios().iter().sum::<usize>();
    println!("The sum of all gear ratios in the engine schematic is {}.", sum);

    Ok(())
}
