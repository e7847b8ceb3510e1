// crates/engine/src/config.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LOWER_BOUND: i64 = 1;
pub const DEFAULT_UPPER_BOUND: i64 = 100;

/// Inclusive scan range.
///
/// `lower <= upper` is not enforced; an inverted range simply contains no
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
}

impl Bounds {
    #[inline]
    #[must_use]
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.lower > self.upper
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub bounds: Bounds,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}
