use anyhow::{Context, Result};
use clap::Parser;
use day15::{Boxes, CLIArgs};

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let steps = day15::read_steps(&args.input_path).with_context(|| {
        format!(
            "Failed to read initialization sequence from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut boxes = Boxes::default();
    for op in day15::parse_operations(&steps)? {
        boxes.apply(&op);
    }
    println!(
        "The focusing power of the resulting lens configuration is {}.",
        boxes.focusing_power()
    );

    Ok(())
}
