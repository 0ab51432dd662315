use anyhow::{Context, Result};
use clap::Parser;
use day09::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let histories = day09::read_histories(&args.input_path).with_context(|| {
        format!(
            "Failed to read histories from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = histories.iter().map(|h| h.prev_value()).sum::<i64>();
    println!("The sum of extrapolated previous values is {}.", sum);

    Ok(())
}
