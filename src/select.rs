//! The enumerated algorithm choices and the typed input each one expects.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::DispatchError;

/// One of the ten algorithms, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    MaxDiffBruteForce,
    MaxDiffOptimized,
    Division,
    PrimeFactorization,
    Gcd,
    Lcm,
    BaseExpansion,
    BinaryAddition,
}

impl Algorithm {
    /// Every choice, in menu order.
    pub const ALL: [Self; 10] = [
        Self::LinearSearch,
        Self::BinarySearch,
        Self::MaxDiffBruteForce,
        Self::MaxDiffOptimized,
        Self::Division,
        Self::PrimeFactorization,
        Self::Gcd,
        Self::Lcm,
        Self::BaseExpansion,
        Self::BinaryAddition,
    ];

    /// Human-readable menu label.
    pub fn name(self) -> &'static str {
        match self {
            Self::LinearSearch => "Linear Search",
            Self::BinarySearch => "Binary Search",
            Self::MaxDiffBruteForce => "Max Difference (Brute Force)",
            Self::MaxDiffOptimized => "Max Difference (Optimized)",
            Self::Division => "Division Algorithm",
            Self::PrimeFactorization => "Prime Factorization",
            Self::Gcd => "GCD",
            Self::Lcm => "LCM",
            Self::BaseExpansion => "Base-B Expansion",
            Self::BinaryAddition => "Binary Addition",
        }
    }

    /// Kebab-case identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::LinearSearch => "linear-search",
            Self::BinarySearch => "binary-search",
            Self::MaxDiffBruteForce => "max-diff-brute-force",
            Self::MaxDiffOptimized => "max-diff-optimized",
            Self::Division => "division",
            Self::PrimeFactorization => "prime-factorization",
            Self::Gcd => "gcd",
            Self::Lcm => "lcm",
            Self::BaseExpansion => "base-expansion",
            Self::BinaryAddition => "binary-addition",
        }
    }

    /// Example input shown next to the input field.
    pub fn hint(self) -> &'static str {
        match self {
            Self::LinearSearch => "Example: [1,2,3,4], 3",
            Self::BinarySearch => "Example: [5,2,9,1], 9",
            Self::MaxDiffBruteForce | Self::MaxDiffOptimized => "Example: [7,2,5,1,6]",
            Self::Division => "Example: 10, 3",
            Self::PrimeFactorization => "Example: 84",
            Self::Gcd => "Example: 20, 28",
            Self::Lcm => "Example: 12, 15",
            Self::BaseExpansion => "Example: 31, 2",
            Self::BinaryAddition => "Example: '1010', '110'",
        }
    }

    /// The shape the textual input must take for this algorithm.
    pub fn shape(self) -> InputShape {
        match self {
            Self::LinearSearch | Self::BinarySearch => InputShape::SequenceAndTarget,
            Self::MaxDiffBruteForce | Self::MaxDiffOptimized => InputShape::Sequence,
            Self::Division | Self::Gcd | Self::Lcm | Self::BaseExpansion => {
                InputShape::IntegerPair
            }
            Self::PrimeFactorization => InputShape::Integer,
            Self::BinaryAddition => InputShape::BinaryPair,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DispatchError;

    /// Accepts either the menu label or the slug, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| {
                algorithm.name().eq_ignore_ascii_case(wanted)
                    || algorithm.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DispatchError::UnknownAlgorithm {
                name: wanted.to_string(),
            })
    }
}

/// Syntactic form of an algorithm's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputShape {
    /// `84`
    Integer,
    /// `10, 3`
    IntegerPair,
    /// `[7,2,5,1,6]`
    Sequence,
    /// `[1,2,3,4], 3`
    SequenceAndTarget,
    /// `'1010', '110'`
    BinaryPair,
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "integer",
            Self::IntegerPair => "pair of integers",
            Self::Sequence => "integer sequence",
            Self::SequenceAndTarget => "integer sequence and target",
            Self::BinaryPair => "pair of binary strings",
        };
        f.write_str(label)
    }
}

/// Parsed input, tagged by shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Integer(BigInt),
    IntegerPair(BigInt, BigInt),
    Sequence(Vec<BigInt>),
    SequenceAndTarget(Vec<BigInt>, BigInt),
    BinaryPair(String, String),
}

impl Input {
    /// The shape this value has.
    pub fn shape(&self) -> InputShape {
        match self {
            Self::Integer(_) => InputShape::Integer,
            Self::IntegerPair(..) => InputShape::IntegerPair,
            Self::Sequence(_) => InputShape::Sequence,
            Self::SequenceAndTarget(..) => InputShape::SequenceAndTarget,
            Self::BinaryPair(..) => InputShape::BinaryPair,
        }
    }
}
