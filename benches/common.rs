#![allow(dead_code)]

use num_bigint::BigInt;
use rand::Rng;
use rand::rngs::StdRng;

/// Draws `len` integers uniformly from `low..high`.
pub fn random_ints(rng: &mut StdRng, len: usize, low: i64, high: i64) -> Vec<BigInt> {
    (0..len)
        .map(|_| BigInt::from(rng.gen_range(low..high)))
        .collect()
}

/// Draws a random binary digit string of exactly `len` digits.
pub fn random_binary(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
        .collect()
}
