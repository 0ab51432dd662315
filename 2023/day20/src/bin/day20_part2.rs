use anyhow::{Context, Result};
use clap::Parser;
use day20::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let mut circuit = day20::read_circuit(&args.input_path).with_context(|| {
        format!(
            "Failed to read module configuration from given file({}).",
            args.input_path.display()
        )
    })?;

    let press_n = circuit.presses_until_low("rx", 100_000)?;
    println!(
        "The fewest button presses to deliver a low pulse to rx is {}.",
        press_n
    );

    Ok(())
}
