// crates/cli/src/config.rs
use crate::args::Args;
use prime_range_engine::config::Bounds;
pub use prime_range_engine::config::Config;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::new(Bounds::new(args.lower, args.upper))
    }
}
