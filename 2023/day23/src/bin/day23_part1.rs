use anyhow::{Context, Result};
use clap::Parser;
use day23::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let trails = day23::read_trails(&args.input_path).with_context(|| {
        format!(
            "Failed to read trail map from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(steps) = trails.longest_hike(true) {
        println!("The number of steps of the longest hike is {}.", steps);
    } else {
        eprintln!("There's no hike from the entrance to the exit on slippery trails.");
    }

    Ok(())
}
