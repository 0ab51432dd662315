use anyhow::{Context, Result};
use clap::Parser;
use day22::{CLIArgs, Stack};

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let bricks = day22::read_bricks(&args.input_path).with_context(|| {
        format!(
            "Failed to read bricks from given file({}).",
            args.input_path.display()
        )
    })?;

    let stack = Stack::settle(&bricks);
    println!(
        "The sum of bricks that would fall for each disintegrated brick is {}.",
        stack.chain_sum()
    );

    Ok(())
}
