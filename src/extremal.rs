//! Maximum forward difference of a sequence.
//!
//! Both functions compute `max(items[j] - items[i])` over all `i < j`, floored at
//! zero: a running maximum seeded at zero means a non-increasing sequence (and any
//! sequence with fewer than two elements) yields 0 rather than a negative value.
//! The two variants agree on every input; they differ only in cost.

use num_bigint::BigInt;
use num_traits::Zero;

/// Computes the maximum forward difference by checking every pair.
///
/// O(n²) time, O(1) extra space.
pub fn max_diff_brute_force(items: &[BigInt]) -> BigInt {
    let mut best = BigInt::zero();
    for (i, earlier) in items.iter().enumerate() {
        for later in &items[i + 1..] {
            let diff = later - earlier;
            if diff > best {
                best = diff;
            }
        }
    }
    best
}

/// Computes the maximum forward difference in a single pass.
///
/// Tracks the minimum seen so far; at each element the candidate is
/// `element - running_min`, and the minimum is updated after the candidate is
/// taken. O(n) time, O(1) extra space.
///
/// # Examples
///
/// ```
/// use algovault::extremal::max_diff_optimized;
/// use num_bigint::BigInt;
///
/// let items: Vec<BigInt> = [7, 2, 5, 1, 6].into_iter().map(BigInt::from).collect();
/// assert_eq!(max_diff_optimized(&items), BigInt::from(5));
/// ```
pub fn max_diff_optimized(items: &[BigInt]) -> BigInt {
    let mut best = BigInt::zero();
    let Some((first, rest)) = items.split_first() else {
        return best;
    };

    let mut running_min = first;
    for item in rest {
        let diff = item - running_min;
        if diff > best {
            best = diff;
        }
        if item < running_min {
            running_min = item;
        }
    }
    best
}
