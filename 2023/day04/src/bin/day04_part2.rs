use anyhow::{Context, Result};
use clap::Parser;
use day04::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let cards = day04::read_cards(&args.input_path).with_context(|| {
        format!(
            "Failed to read scratchcards from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The total count of scratchcards(originals and copies) is {}.",
        day04::total_cards(&cards)
    );

    Ok(())
}
