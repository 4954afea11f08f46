//! Maps an [`Algorithm`] and its [`Input`] to a library call and a displayable [`Outcome`].

use std::fmt;

use num_bigint::BigInt;
use tracing::{debug, instrument};

use crate::arithmetic::{divide, gcd, lcm};
use crate::binary_add::binary_add;
use crate::error::DispatchError;
use crate::extremal::{max_diff_brute_force, max_diff_optimized};
use crate::number_theory::{base_expansion, prime_factors};
use crate::parse::parse_input;
use crate::search::{binary_search, linear_search};
use crate::select::{Algorithm, Input};

/// Result of running one algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Search result; `None` is displayed as `-1`.
    Index(Option<usize>),
    Integer(BigInt),
    QuotientRemainder(BigInt, BigInt),
    Sequence(Vec<BigInt>),
    Binary(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(Some(index)) => write!(f, "{index}"),
            Self::Index(None) => write!(f, "-1"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::QuotientRemainder(quotient, remainder) => {
                write!(f, "({quotient}, {remainder})")
            }
            Self::Sequence(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Self::Binary(digits) => f.write_str(digits),
        }
    }
}

/// Parses `text` for `algorithm` and runs it.
///
/// # Examples
///
/// ```
/// use algovault::dispatch::run_text;
/// use algovault::select::Algorithm;
///
/// let outcome = run_text(Algorithm::BinarySearch, "[5,2,9,1], 9").unwrap();
/// assert_eq!(outcome.to_string(), "3");
/// ```
pub fn run_text(algorithm: Algorithm, text: &str) -> Result<Outcome, DispatchError> {
    let input = parse_input(algorithm.shape(), text)?;
    debug!(%algorithm, shape = %input.shape(), "parsed input");
    run(algorithm, input)
}

/// Runs `algorithm` on an already-typed input.
///
/// Binary search sorts its sequence before searching, so the reported index refers
/// to the sorted order.
///
/// # Errors
///
/// - [`DispatchError::ShapeMismatch`] if `input` does not have the shape
///   `algorithm` expects.
/// - [`DispatchError::Algorithm`] if the algorithm rejects the values.
#[instrument(level = "debug", skip_all, fields(%algorithm))]
pub fn run(algorithm: Algorithm, input: Input) -> Result<Outcome, DispatchError> {
    let outcome = match (algorithm, input) {
        (Algorithm::LinearSearch, Input::SequenceAndTarget(items, target)) => {
            Outcome::Index(linear_search(&items, &target))
        }
        (Algorithm::BinarySearch, Input::SequenceAndTarget(mut items, target)) => {
            items.sort_unstable();
            Outcome::Index(binary_search(&items, &target))
        }
        (Algorithm::MaxDiffBruteForce, Input::Sequence(items)) => {
            Outcome::Integer(max_diff_brute_force(&items))
        }
        (Algorithm::MaxDiffOptimized, Input::Sequence(items)) => {
            Outcome::Integer(max_diff_optimized(&items))
        }
        (Algorithm::Division, Input::IntegerPair(a, b)) => {
            let (quotient, remainder) = divide(&a, &b)?;
            Outcome::QuotientRemainder(quotient, remainder)
        }
        (Algorithm::PrimeFactorization, Input::Integer(n)) => {
            Outcome::Sequence(prime_factors(&n)?)
        }
        (Algorithm::Gcd, Input::IntegerPair(a, b)) => Outcome::Integer(gcd(&a, &b)),
        (Algorithm::Lcm, Input::IntegerPair(a, b)) => Outcome::Integer(lcm(&a, &b)?),
        (Algorithm::BaseExpansion, Input::IntegerPair(n, base)) => {
            Outcome::Sequence(base_expansion(&n, &base)?)
        }
        (Algorithm::BinaryAddition, Input::BinaryPair(a, b)) => {
            Outcome::Binary(binary_add(&a, &b)?)
        }
        (_, other) => {
            return Err(DispatchError::ShapeMismatch {
                expected: algorithm.shape(),
                found: other.shape(),
            });
        }
    };

    debug!(%outcome, "algorithm finished");
    Ok(outcome)
}
