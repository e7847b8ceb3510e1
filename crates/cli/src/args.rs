// crates/cli/src/args.rs
use clap::{ArgAction, Parser};
use prime_range_engine::config::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "prime_range",
    version = crate::VERSION,
    about = "List the prime numbers in an inclusive range"
)]
pub struct Args {
    /// Lowest value to test (inclusive)
    #[arg(long, default_value_t = DEFAULT_LOWER_BOUND, allow_negative_numbers = true)]
    pub lower: i64,

    /// Highest value to test (inclusive)
    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, allow_negative_numbers = true)]
    pub upper: i64,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Diagnostic output on stderr
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    /// Filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn level(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
