use anyhow::{Context, Result};
use clap::Parser;
use day21::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let garden = day21::read_garden(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of garden plots reachable in exactly {} step(s) is {}.",
        args.steps,
        garden.reachable_n(args.steps)
    );

    Ok(())
}
