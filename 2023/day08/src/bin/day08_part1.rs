use anyhow::{Context, Result};
use clap::Parser;
use day08::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let network = day08::read_network(&args.input_path).with_context(|| {
        format!(
            "Failed to read network from given file({}).",
            args.input_path.display()
        )
    })?;

    let steps = network.steps_to("AAA", |n| n == "ZZZ")?;
    println!("The number of steps required to reach ZZZ is {}.", steps);

    Ok(())
}
