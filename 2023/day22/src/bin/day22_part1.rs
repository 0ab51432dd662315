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
    println!("The number of bricks safe to disintegrate is {}.", stack.safe_n());

    Ok(())
}
