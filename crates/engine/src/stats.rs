// crates/engine/src/stats.rs
use crate::config::Bounds;
use serde::{Deserialize, Serialize};

/// Outcome of one enumeration: the scanned bounds and the primes found in
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub bounds: Bounds,
    pub primes: Vec<i64>,
}
