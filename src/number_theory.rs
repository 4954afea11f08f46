//! Prime factorization and positional (base-B) expansion.
//!
//! Both operations reject inputs outside their domain instead of inheriting
//! whatever the host's modulo operator would do with them:
//!
//! - [`prime_factors`] requires `n >= 1`.
//! - [`base_expansion`] requires `n >= 0` and `base >= 2`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::AlgorithmError;

/// Factorizes `n` into primes by trial division.
///
/// Divisors are tried in increasing order starting at 2 while `i * i` does not
/// exceed what is left of `n`; each divisor is divided out completely before moving
/// on. Whatever remains above 1 is prime and is appended last. The result is
/// ascending, with multiplicity, and empty for `n = 1`.
///
/// # Errors
///
/// Returns [`AlgorithmError::NonPositive`] if `n <= 0`.
///
/// # Examples
///
/// ```
/// use algovault::number_theory::prime_factors;
/// use num_bigint::BigInt;
///
/// let factors = prime_factors(&BigInt::from(84)).unwrap();
/// let expected: Vec<BigInt> = [2, 2, 3, 7].into_iter().map(BigInt::from).collect();
/// assert_eq!(factors, expected);
/// ```
pub fn prime_factors(n: &BigInt) -> Result<Vec<BigInt>, AlgorithmError> {
    if !n.is_positive() {
        return Err(AlgorithmError::NonPositive);
    }

    let mut remaining = n.clone();
    let mut factors = Vec::new();
    let mut divisor = BigInt::from(2);

    while &divisor * &divisor <= remaining {
        loop {
            let (quotient, remainder) = remaining.div_rem(&divisor);
            if !remainder.is_zero() {
                break;
            }
            factors.push(divisor.clone());
            remaining = quotient;
        }
        divisor += BigInt::one();
    }

    if remaining > BigInt::one() {
        factors.push(remaining);
    }

    Ok(factors)
}

/// Expands `n` in base `base`, most-significant digit first.
///
/// Digits are produced least-significant first by repeated `div_rem` and then
/// reversed. Zero expands to `[0]`.
///
/// # Errors
///
/// - [`AlgorithmError::Negative`] if `n < 0`.
/// - [`AlgorithmError::InvalidBase`] if `base < 2`.
pub fn base_expansion(n: &BigInt, base: &BigInt) -> Result<Vec<BigInt>, AlgorithmError> {
    if n.is_negative() {
        return Err(AlgorithmError::Negative);
    }
    if *base < BigInt::from(2) {
        return Err(AlgorithmError::InvalidBase);
    }
    if n.is_zero() {
        return Ok(vec![BigInt::zero()]);
    }

    let mut digits = Vec::new();
    let mut remaining = n.clone();
    while remaining.is_positive() {
        let (quotient, digit) = remaining.div_rem(base);
        digits.push(digit);
        remaining = quotient;
    }
    digits.reverse();

    Ok(digits)
}
