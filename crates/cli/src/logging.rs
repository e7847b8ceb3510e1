// crates/cli/src/logging.rs
use crate::args::LogArgs;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over the `-v`/`-q` flags. Records emitted through the `log`
/// facade by the engine are forwarded by the subscriber's log bridge. Calling
/// this twice is harmless; the second call leaves the first subscriber in
/// place.
pub fn init(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(log.verbose >= 2)
        .with_line_number(log.verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("prime_range {} started with verbosity level {}", crate::VERSION, log.verbose);
    }
}
