use anyhow::{Context, Result};
use clap::Parser;
use day17::{CLIArgs, Crucible};

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let city = day17::read_city(&args.input_path).with_context(|| {
        format!(
            "Failed to read heat loss map from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(loss) = city.min_heat_loss(Crucible::ULTRA) {
        println!("The least heat loss the ultra crucible can incur is {}.", loss);
    } else {
        eprintln!("The crucible can't reach the factory in given city.");
    }

    Ok(())
}
