use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    #[arg(value_name = "filename")]
    pub input_path: PathBuf,
}

/// Parse the command line of a puzzle binary.
///
/// A missing or malformed argument list prints the usage error to stderr and yields `None`,
/// the caller is expected to stop without printing any result. `--help` still exits through clap.
pub fn parse_args() -> Option<CLIArgs> {
    match CLIArgs::try_parse() {
        Ok(args) => Some(args),
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            None
        }
        Err(e) => e.exit(),
    }
}

/// Install `env_logger` on stderr, `RUST_LOG` overrides the default `warn` level.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(text.lines().map(|l| l.trim().to_string()).collect())
}

/// Read all trimmed lines of the given file.
///
/// Any failure is reported as `Error importing: <path>` on stderr and turned into an empty
/// line list, so a run over an unreadable file still finishes with the reducer's initial value.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    match read_lines(&path) {
        Ok(lines) => {
            debug!(
                "Read {} line(s) from given file({}).",
                lines.len(),
                path.as_ref().display()
            );
            lines
        }
        Err(e) => {
            warn!("{:#}", e);
            eprintln!("Error importing: {}", path.as_ref().display());
            Vec::new()
        }
    }
}

pub fn fold_lines<I, S, T, A, F, R>(lines: I, mut transform: F, reduce: R, initial: A) -> A
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> T,
    R: FnMut(A, T) -> A,
{
    lines
        .into_iter()
        .map(|l| transform(l.as_ref()))
        .fold(initial, reduce)
}

pub fn run<P, T, A, F, R>(path: P, transform: F, reduce: R, initial: A) -> A
where
    P: AsRef<Path>,
    F: FnMut(&str) -> T,
    R: FnMut(A, T) -> A,
{
    fold_lines(load_lines(path), transform, reduce, initial)
}

/// Sum of the transformed values of every line, lines without a value should map to 0.
///
/// The total saturates at `u128::MAX` instead of overflowing.
pub fn sum_lines<P, T, F>(path: P, transform: F) -> u128
where
    P: AsRef<Path>,
    T: Into<u128>,
    F: FnMut(&str) -> T,
{
    run(
        path,
        transform,
        |sum: u128, v: T| sum.saturating_add(v.into()),
        0,
    )
}
