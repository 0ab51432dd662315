use anyhow::{Context, Result};
use clap::Parser;
use day13::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let patterns = day13::read_patterns(&args.input_path).with_context(|| {
        format!(
            "Failed to read patterns from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The summary of all pattern notes(with smudges fixed) is {}.",
        day13::summarize(&patterns, 1)
    );

    Ok(())
}
