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

    let mut sum = 0;
    for part in system.parts() {
        if system.accepts(part)? {
            sum += part.rating_sum();
        }
    }
    println!("The sum of ratings of all accepted parts is {}.", sum);

    Ok(())
}
