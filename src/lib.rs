//! Classic search, extremal-difference and integer algorithms, with a typed front end.
//!
//! The library is split into two layers:
//!
//! 1. **Algorithms.** Ten pure functions over in-memory values:
//!    - [`search`]: [`linear_search`](search::linear_search),
//!      [`binary_search`](search::binary_search).
//!    - [`extremal`]: [`max_diff_brute_force`](extremal::max_diff_brute_force),
//!      [`max_diff_optimized`](extremal::max_diff_optimized).
//!    - [`arithmetic`]: [`divide`](arithmetic::divide), [`gcd`](arithmetic::gcd),
//!      [`lcm`](arithmetic::lcm).
//!    - [`number_theory`]: [`prime_factors`](number_theory::prime_factors),
//!      [`base_expansion`](number_theory::base_expansion).
//!    - [`binary_add`](mod@binary_add): [`binary_add`](binary_add::binary_add).
//! 2. **Selection and dispatch.** [`Algorithm`] enumerates the choices, [`parse`]
//!    reads raw text into a typed [`Input`] for the choice's [`InputShape`], and
//!    [`dispatch`] runs the matching function and returns a displayable [`Outcome`].
//!
//! Integers are [`num_bigint::BigInt`] throughout, so nothing overflows.
//!
//! ```
//! use algovault::{Algorithm, dispatch};
//!
//! let outcome = dispatch::run_text(Algorithm::Lcm, "12, 15").unwrap();
//! assert_eq!(outcome.to_string(), "60");
//! ```

#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod arithmetic;
pub mod binary_add;
pub mod dispatch;
mod error;
pub mod extremal;
pub mod number_theory;
pub mod parse;
pub mod search;
pub mod select;
#[cfg(test)]
mod test_utils;

pub use dispatch::Outcome;
pub use error::{AlgorithmError, DispatchError, ParseError};
pub use select::{Algorithm, Input, InputShape};
