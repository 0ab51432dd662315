use anyhow::{Context, Result};
use clap::Parser;
use day15::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let steps = day15::read_steps(&args.input_path).with_context(|| {
        format!(
            "Failed to read initialization sequence from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = steps.iter().map(|s| day15::hash(s)).sum::<usize>();
    println!("The sum of HASH results of all steps is {}.", sum);

    Ok(())
}
