use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let records = day12::read_records(&args.input_path).with_context(|| {
        format!(
            "Failed to read condition records from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = records.iter().map(|r| r.arrangement_n()).sum::<u64>();
    println!("The sum of possible arrangement counts is {}.", sum);

    Ok(())
}
