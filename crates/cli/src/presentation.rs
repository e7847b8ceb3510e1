// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use prime_range_engine::config::Bounds;
use std::io::{self, BufWriter, Write};

/// Header line naming the scanned bounds.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_header<W: Write>(bounds: Bounds, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Prime numbers between {} and {} are:",
        bounds.lower, bounds.upper
    )
}

/// Write the two-line report while the range is being scanned.
///
/// The header is flushed before scanning starts. Every prime is then written
/// followed by a single space as soon as it is found, and the line ends with a
/// newline. Returns the number of primes written.
///
/// # Errors
///
/// Returns the first error raised by `out`; scanning stops there.
pub fn stream_report<W: Write>(config: &Config, out: &mut W) -> io::Result<usize> {
    write_header(config.bounds, out)?;
    out.flush()?;
    let count = prime_range_engine::for_each_prime(config, |prime| write!(out, "{prime} "))?;
    writeln!(out)?;
    Ok(count)
}

/// Stream the report to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written or flushed.
pub fn print_report(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    stream_report(config, &mut out)?;
    out.flush()?;
    Ok(())
}
