use std::io::{stdout, Write};

use anyhow::{Context, Result};
use day2::CubeLimits;

fn main() -> Result<()> {
    pipeline::init_logger();
    let Some(args) = pipeline::parse_args() else {
        return Ok(());
    };

    let limits = CubeLimits::PUZZLE;
    let sum = pipeline::sum_lines(&args.input_path, |l| day2::possible_game_id(l, &limits));
    writeln!(stdout(), "{}", sum)
        .context("Failed to write sum of possible game ids to stdout.")?;

    Ok(())
}
