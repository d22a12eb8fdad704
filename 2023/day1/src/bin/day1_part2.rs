use std::io::{stdout, Write};

use anyhow::{Context, Result};
use day1::{DigitWords, ENGLISH_DIGIT_WORDS};

fn main() -> Result<()> {
    pipeline::init_logger();
    let Some(args) = pipeline::parse_args() else {
        return Ok(());
    };

    let words = DigitWords::new(&ENGLISH_DIGIT_WORDS)
        .context("Failed to build substitution table of spelled-out digits.")?;
    let sum = pipeline::sum_lines(&args.input_path, |l| words.calibration_value(l));
    writeln!(stdout(), "{}", sum)
        .context("Failed to write calibration sum to stdout.")?;

    Ok(())
}
