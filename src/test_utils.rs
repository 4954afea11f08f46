//! Shared test utilities for the algorithm modules.
//!
//! This module provides small constructors so tests can write integer literals
//! instead of spelling out `BigInt::from` at every call site.

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Creates a BigInt from an i64 literal.
///
/// # Examples
/// ```ignore
/// let three = int(3);
/// ```
pub fn int(value: i64) -> BigInt {
    BigInt::from(value)
}

/// Creates a vector of BigInt values from i64 literals.
///
/// # Examples
/// ```ignore
/// let items = ints(&[7, 2, 5, 1, 6]);
/// ```
pub fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().copied().map(BigInt::from).collect()
}

/// Returns true if `n` is prime, checked by naive trial division.
///
/// Deliberately independent of [`prime_factors`](crate::number_theory::prime_factors)
/// so it can be used to check that function's output.
pub fn is_prime_naive(n: &BigInt) -> bool {
    if *n < int(2) {
        return false;
    }
    let mut divisor = int(2);
    while &divisor * &divisor <= *n {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += BigInt::one();
    }
    true
}
