use std::io::{stdout, Write};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    pipeline::init_logger();
    let Some(args) = pipeline::parse_args() else {
        return Ok(());
    };

    let sum = pipeline::sum_lines(&args.input_path, day2::min_cubes_power);
    writeln!(stdout(), "{}", sum)
        .context("Failed to write sum of cube set powers to stdout.")?;

    Ok(())
}
