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

    println!(
        "The product of low and high pulse counts after 1000 presses is {}.",
        circuit.pulse_product(1000)
    );

    Ok(())
}
