// crates/engine/src/lib.rs
pub mod config;
pub mod enumerator;
pub mod primality;
pub mod stats;

use crate::config::Config;
use crate::stats::RunResult;
use std::convert::Infallible;

pub use crate::enumerator::{Primes, primes_in};
pub use crate::primality::is_prime;

/// Scan `config.bounds` in ascending order and hand each prime to `on_prime`
/// as soon as it is found.
///
/// Returns the number of primes delivered. The scan stops at the first error
/// returned by `on_prime`, so a consumer that goes away (e.g. a closed pipe)
/// does not pay for the rest of the range. An inverted range (`lower > upper`)
/// is not an error and delivers nothing.
///
/// # Errors
///
/// Returns the first error produced by `on_prime`.
pub fn for_each_prime<F, E>(config: &Config, mut on_prime: F) -> Result<usize, E>
where
    F: FnMut(i64) -> Result<(), E>,
{
    let bounds = config.bounds;
    log::debug!("scanning {bounds} for primes");

    if bounds.is_empty() {
        log::debug!("lower bound exceeds upper bound, nothing to scan");
    }

    let mut count = 0;
    for prime in primes_in(bounds) {
        log::trace!("prime found: {prime}");
        if let Err(e) = on_prime(prime) {
            log::debug!("scan of {bounds} stopped after {count} primes");
            return Err(e);
        }
        count += 1;
    }

    log::info!(
        "found {count} primes between {} and {}",
        bounds.lower,
        bounds.upper
    );
    Ok(count)
}

/// Run the prime enumeration engine and collect the primes.
///
/// Convenience for library callers that want the whole result at once; the
/// binary streams through [`for_each_prime`] instead.
#[must_use]
pub fn run(config: &Config) -> RunResult {
    let mut primes = Vec::new();
    let scanned = for_each_prime(config, |p| {
        primes.push(p);
        Ok::<(), Infallible>(())
    });
    match scanned {
        Ok(_) => {}
        Err(never) => match never {},
    }

    RunResult {
        bounds: config.bounds,
        primes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;

    #[test]
    fn test_run_default_config() {
        let result = run(&Config::default());
        assert_eq!(result.bounds, Bounds::new(1, 100));
        assert_eq!(result.primes.len(), 25);
        assert_eq!(result.primes.first(), Some(&2));
        assert_eq!(result.primes.last(), Some(&97));
    }

    #[test]
    fn test_run_inverted_bounds_is_empty() {
        let result = run(&Config::new(Bounds::new(100, 1)));
        assert!(result.primes.is_empty());
        assert_eq!(result.bounds, Bounds::new(100, 1));
    }

    #[test]
    fn test_run_is_idempotent() {
        let config = Config::default();
        assert_eq!(run(&config), run(&config));
    }

    #[test]
    fn test_for_each_prime_delivers_in_order_and_counts() {
        let mut seen = Vec::new();
        let count = for_each_prime(&Config::new(Bounds::new(10, 30)), |p| {
            seen.push(p);
            Ok::<(), Infallible>(())
        })
        .unwrap();
        assert_eq!(seen, [11, 13, 17, 19, 23, 29]);
        assert_eq!(count, 6);
    }

    #[test]
    fn test_for_each_prime_stops_at_first_error() {
        let mut seen = Vec::new();
        let err = for_each_prime(&Config::default(), |p| {
            seen.push(p);
            if p == 7 { Err("consumer gone") } else { Ok(()) }
        })
        .unwrap_err();
        assert_eq!(err, "consumer gone");
        assert_eq!(seen, [2, 3, 5, 7]);
    }

    #[test]
    fn test_for_each_prime_stops_early_on_huge_range() {
        // Walking all of this range would take far too long; stopping after
        // the first prime must return immediately.
        let config = Config::new(Bounds::new(1, i64::MAX));
        let mut seen = Vec::new();
        let err = for_each_prime(&config, |p| {
            seen.push(p);
            Err(())
        });
        assert_eq!(err, Err(()));
        assert_eq!(seen, [2]);
    }
}
