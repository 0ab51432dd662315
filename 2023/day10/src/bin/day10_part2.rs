use anyhow::{Context, Result};
use clap::Parser;
use day10::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let maze = day10::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipe maze from given file({}).",
            args.input_path.display()
        )
    })?;

    let tiles = maze.main_loop()?;
    println!(
        "The number of tiles enclosed by the loop is {}.",
        day10::enclosed_tile_n(&tiles)
    );

    Ok(())
}
