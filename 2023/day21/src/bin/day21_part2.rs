use anyhow::{Context, Result};
use clap::Parser;
use day21::Part2CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = Part2CLIArgs::parse();
    let garden = day21::read_garden(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of garden plots reachable in exactly {} step(s) on the infinite map is {}.",
        args.steps,
        garden.infinite_reachable_n(args.steps)
    );

    Ok(())
}
