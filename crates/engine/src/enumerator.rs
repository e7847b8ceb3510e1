// crates/engine/src/enumerator.rs
use crate::config::Bounds;
use crate::primality::is_prime;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Lazy iterator over the primes of an inclusive range, in ascending order.
#[derive(Debug, Clone)]
pub struct Primes {
    candidates: RangeInclusive<i64>,
}

impl Primes {
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self {
            candidates: bounds.lower..=bounds.upper,
        }
    }
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.candidates.find(|&n| is_prime(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.candidates.size_hint().1)
    }
}

impl FusedIterator for Primes {}

/// Enumerate the primes in `bounds`.
///
/// Empty when `bounds.lower > bounds.upper`.
#[must_use]
pub const fn primes_in(bounds: Bounds) -> Primes {
    Primes::new(bounds)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output is strictly ascending and every element is prime and in range
        #[test]
        fn test_sorted_prime_and_in_range(lower in -1_000i64..5_000, len in 0i64..2_000) {
            let upper = lower + len;
            let primes: Vec<_> = primes_in(Bounds::new(lower, upper)).collect();
            prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
            for &p in &primes {
                prop_assert!(is_prime(p));
                prop_assert!((lower..=upper).contains(&p));
            }
        }

        /// No prime of the range is skipped
        #[test]
        fn test_complete(lower in 0i64..5_000, len in 0i64..500) {
            let bounds = Bounds::new(lower, lower + len);
            let expected = (lower..=lower + len).filter(|&n| is_prime(n)).count();
            prop_assert_eq!(primes_in(bounds).count(), expected);
        }
    }
}
