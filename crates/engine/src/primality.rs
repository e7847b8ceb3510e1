// crates/engine/src/primality.rs

/// Returns `true` if `n` is prime.
///
/// Trial division by every `i` in `2..=floor(sqrt(n))`. Any composite `n` has
/// a factor no larger than its square root, so no further candidates are
/// needed. Values below 2 (including all negatives) are never prime.
///
/// The bound is checked as `i <= n / i` rather than `i * i <= n` so the loop
/// never overflows, even for `n == i64::MAX`.
#[must_use]
pub const fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
