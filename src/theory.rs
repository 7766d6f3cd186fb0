//! Closed-form counts for the binary string universe.
//!
//! The number of strings of length `n` with exactly `k` ones is the binomial
//! coefficient `C(n, k)`, and the universe has `2^n` strings in total. Both grow far
//! beyond `u64` for the lengths accepted interactively (up to 1000), so they are
//! computed exactly with [`BigUint`].

use num_bigint::BigUint;

use crate::accumulator::Distribution;

/// Size of the universe of binary strings of length `n`, i.e. `2^n`.
pub fn universe_size(n: usize) -> BigUint {
    BigUint::from(1u32) << n
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = BigUint::from(1u32);
    for i in 0..k {
        // Exact at every step: the running product is C(n, i + 1).
        result *= (n - i) as u64;
        result /= (i + 1) as u64;
    }
    result
}

/// The full row `C(n, 0), C(n, 1), ..., C(n, n)`.
pub fn binomial_row(n: usize) -> Vec<BigUint> {
    let mut row = Vec::with_capacity(n + 1);
    let mut current = BigUint::from(1u32);
    for k in 0..=n {
        row.push(current.clone());
        current *= (n - k) as u64;
        current /= (k + 1) as u64;
    }
    row
}

/// Returns true if every enumerated count equals its binomial coefficient.
pub fn matches_binomial(distribution: &Distribution) -> bool {
    let row = binomial_row(distribution.n());
    distribution.counts().len() == row.len()
        && distribution
            .counts()
            .iter()
            .zip(&row)
            .all(|(&count, expected)| BigUint::from(count) == *expected)
}
