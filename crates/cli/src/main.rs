use clap::Parser;
use prime_range_cli::args::Args;
use prime_range_cli::config::Config;
use prime_range_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.log);
    tracing::trace!(?args, "parsed command line");

    let config = Config::from(args);

    match presentation::print_report(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed before the report was fully written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
