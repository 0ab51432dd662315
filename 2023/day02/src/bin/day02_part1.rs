use anyhow::{Context, Result};
use clap::Parser;
use day02::{CLIArgs, Cubes};

fn main() -> Result<()> {
    advent::logging::init();
    let args = CLIArgs::parse();
    let games = day02::read_games(&args.input_path).with_context(|| {
        format!(
            "Failed to read games from given file({}).",
            args.input_path.display()
        )
    })?;

    let bag = Cubes::new(12, 13, 14);
    let id_sum = games
        .iter()
        .filter(|g| g.is_possible_with(&bag))
        .map(|g| g.id())
        .sum::<usize>();
    println!(
        "The sum of ids of games possible with {} red, {} green and {} blue cube(s) is {}.",
        bag.red, bag.green, bag.blue, id_sum
    );

    Ok(())
}
