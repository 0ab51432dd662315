use anyhow::{Context, Result};
use clap::Parser;
use day18::CLIArgs;

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let plan = day18::read_plan(&args.input_path).with_context(|| {
        format!(
            "Failed to read dig plan from given file({}).",
            args.input_path.display()
        )
    })?;

    let volume = day18::lagoon_volume(plan.iter().map(|l| l.decoded));
    println!(
        "The volume of lava the lagoon(following colour codes) can hold is {}.",
        volume
    );

    Ok(())
}
