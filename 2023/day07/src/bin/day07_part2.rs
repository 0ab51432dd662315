use anyhow::{Context, Result};
use clap::Parser;
use day07::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let hands = day07::read_hands(&args.input_path).with_context(|| {
        format!(
            "Failed to read hands from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The total winnings of all hands(with jokers) is {}.",
        day07::total_winnings(&hands, true)
    );

    Ok(())
}
