use std::io::{stdout, Write};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    pipeline::init_logger();
    let Some(args) = pipeline::parse_args() else {
        return Ok(());
    };

    let sum = pipeline::sum_lines(&args.input_path, day1::calibration_value);
    writeln!(stdout(), "{}", sum)
        .context("Failed to write calibration sum to stdout.")?;

    Ok(())
}
