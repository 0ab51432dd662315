use anyhow::{Context, Result};
use clap::Parser;
use day01::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let lines = advent::input::read_lines(&args.input_path).with_context(|| {
        format!(
            "Failed to read calibration document from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = day01::calibration_sum(&lines, false)?;
    println!(
        "The sum of calibration values(using digits) is {}.",
        sum
    );

    Ok(())
}
