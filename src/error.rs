//! Error types for the algorithm library and the dispatch layer.
//!
//! # Error taxonomy
//!
//! - **Domain violations** ([`AlgorithmError`]): the input is well formed but the
//!   operation is undefined for it (division by zero, `lcm(0, 0)`, factorizing a
//!   non-positive number, a character outside `{'0', '1'}` in a binary string).
//! - **Malformed input** ([`ParseError`]): raw text that cannot be read as the shape
//!   an algorithm expects.
//! - **Dispatch failures** ([`DispatchError`]): either of the above, or an
//!   algorithm name that is not recognised.
//!
//! Unsorted input to [`binary_search`](crate::search::binary_search) is not an
//! error at all: the result is unspecified but never a panic.

use std::fmt;

use crate::select::InputShape;

/// Errors raised by the algorithm library when an input is outside an operation's domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The divisor of a division was zero.
    DivisionByZero,
    /// `lcm(0, 0)` is undefined because `gcd(0, 0) = 0`.
    LcmOfZeros,
    /// The operation requires a strictly positive input.
    NonPositive,
    /// The operation requires a non-negative input.
    Negative,
    /// Positional expansion requires a base of at least 2.
    InvalidBase,
    /// A binary operand had no digits.
    EmptyBinaryString,
    /// A binary operand contained a character other than `'0'` or `'1'`.
    InvalidBinaryDigit { position: usize, found: char },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::LcmOfZeros => write!(f, "lcm is undefined when both operands are zero"),
            Self::NonPositive => write!(f, "input must be a positive integer"),
            Self::Negative => write!(f, "input must be a non-negative integer"),
            Self::InvalidBase => write!(f, "base must be at least 2"),
            Self::EmptyBinaryString => write!(f, "binary string must not be empty"),
            Self::InvalidBinaryDigit { position, found } => {
                write!(f, "invalid binary digit {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Errors raised while reading textual input into a typed [`Input`](crate::select::Input).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    Empty,
    /// A character that cannot start or continue the expected item.
    UnexpectedChar { position: usize, found: char },
    /// The input ended before the expected item was complete.
    UnexpectedEnd,
    /// A complete value was read but more text followed.
    TrailingInput { position: usize },
    /// Digits were expected but the token is not a decimal integer.
    InvalidInteger { text: String },
    /// The number of comma-separated items did not match the shape.
    Arity { expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::UnexpectedChar { position, found } => {
                write!(f, "unexpected character {found:?} at position {position}")
            }
            Self::UnexpectedEnd => write!(f, "input ended unexpectedly"),
            Self::TrailingInput { position } => {
                write!(f, "unexpected trailing input at position {position}")
            }
            Self::InvalidInteger { text } => write!(f, "{text:?} is not an integer"),
            Self::Arity { expected, found } => {
                write!(f, "expected {expected} value(s), found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised by [`dispatch::run`](crate::dispatch::run) and friends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The algorithm name did not match any known choice.
    UnknownAlgorithm { name: String },
    /// The input text could not be parsed.
    Parse(ParseError),
    /// The algorithm rejected its input.
    Algorithm(AlgorithmError),
    /// A typed input of the wrong shape was handed to an algorithm.
    ShapeMismatch {
        expected: InputShape,
        found: InputShape,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm {name:?}"),
            Self::Parse(err) => write!(f, "malformed input: {err}"),
            Self::Algorithm(err) => write!(f, "{err}"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "expected {expected} input, found {found} input")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<ParseError> for DispatchError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<AlgorithmError> for DispatchError {
    fn from(error: AlgorithmError) -> Self {
        Self::Algorithm(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_error_display() {
        assert_eq!(AlgorithmError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            AlgorithmError::InvalidBinaryDigit {
                position: 2,
                found: '7'
            }
            .to_string(),
            "invalid binary digit '7' at position 2"
        );
    }

    #[test]
    fn parse_error_display() {
        assert_eq!(
            ParseError::Arity {
                expected: 2,
                found: 3
            }
            .to_string(),
            "expected 2 value(s), found 3"
        );
        assert_eq!(
            ParseError::InvalidInteger {
                text: "12a".to_string()
            }
            .to_string(),
            "\"12a\" is not an integer"
        );
    }

    #[test]
    fn dispatch_error_wraps_inner_errors() {
        let parse: DispatchError = ParseError::Empty.into();
        assert_eq!(parse.to_string(), "malformed input: input is empty");

        let domain: DispatchError = AlgorithmError::LcmOfZeros.into();
        assert!(matches!(
            domain,
            DispatchError::Algorithm(AlgorithmError::LcmOfZeros)
        ));
        assert_eq!(
            domain.to_string(),
            "lcm is undefined when both operands are zero"
        );
    }

    #[test]
    fn shape_mismatch_display() {
        let err = DispatchError::ShapeMismatch {
            expected: InputShape::IntegerPair,
            found: InputShape::Sequence,
        };
        assert_eq!(
            err.to_string(),
            "expected pair of integers input, found integer sequence input"
        );
    }
}
