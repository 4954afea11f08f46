//! Integer arithmetic: Euclidean division, GCD and LCM.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::AlgorithmError;

/// Divides `a` by `b`, returning `(quotient, remainder)` with floor semantics.
///
/// The quotient is rounded toward negative infinity, so `a = b * q + r` holds with
/// `r` carrying the sign of `b`. For a positive divisor this is the division
/// algorithm's `0 <= r < b`.
///
/// # Errors
///
/// Returns [`AlgorithmError::DivisionByZero`] if `b` is zero.
///
/// # Examples
///
/// ```
/// use algovault::arithmetic::divide;
/// use num_bigint::BigInt;
///
/// let (q, r) = divide(&BigInt::from(-7), &BigInt::from(2)).unwrap();
/// assert_eq!((q, r), (BigInt::from(-4), BigInt::from(1)));
/// ```
pub fn divide(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), AlgorithmError> {
    if b.is_zero() {
        return Err(AlgorithmError::DivisionByZero);
    }
    Ok(a.div_mod_floor(b))
}

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Operands are taken by magnitude, so the result is never negative:
/// `gcd(-20, 28) = 4`. `gcd(a, 0) = |a|` and `gcd(0, 0) = 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut x = a.abs();
    let mut y = b.abs();
    while !y.is_zero() {
        let r = &x % &y;
        x = y;
        y = r;
    }
    x
}

/// Least common multiple, `|a * b| / gcd(a, b)`.
///
/// The product is formed in arbitrary precision so it cannot overflow. If exactly
/// one operand is zero the result is zero.
///
/// # Errors
///
/// Returns [`AlgorithmError::LcmOfZeros`] if both operands are zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> Result<BigInt, AlgorithmError> {
    let divisor = gcd(a, b);
    if divisor.is_zero() {
        return Err(AlgorithmError::LcmOfZeros);
    }
    Ok((a * b).abs() / divisor)
}
