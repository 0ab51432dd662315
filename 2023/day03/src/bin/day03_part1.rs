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

    let sum = schematic.part_numbers().map(|n| n.value()).sum::<usize>();
    println!("The sum of all part numbers in the engine schematic is {}.", sum);

    Ok(())
}
