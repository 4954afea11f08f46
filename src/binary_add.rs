//! Addition of binary digit strings.

use crate::error::AlgorithmError;

/// Adds two binary digit strings (most-significant digit first) by ripple carry.
///
/// Digits are consumed right to left; the result is
/// `max(a.len(), b.len())` digits long, plus one if a carry remains after both
/// operands are exhausted. Leading zeros present in the operands are kept, so
/// `"0011" + "1"` is `"0100"`.
///
/// # Errors
///
/// - [`AlgorithmError::EmptyBinaryString`] if either operand is empty.
/// - [`AlgorithmError::InvalidBinaryDigit`] for the first character outside
///   `{'0', '1'}`, checking `a` before `b`.
///
/// # Examples
///
/// ```
/// use algovault::binary_add::binary_add;
///
/// assert_eq!(binary_add("1010", "110").unwrap(), "10000");
/// ```
pub fn binary_add(a: &str, b: &str) -> Result<String, AlgorithmError> {
    let lhs = binary_digits(a)?;
    let rhs = binary_digits(b)?;

    let mut reversed = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
    let mut lhs_iter = lhs.iter().rev();
    let mut rhs_iter = rhs.iter().rev();
    let mut carry = 0u8;

    loop {
        let (x, y) = (lhs_iter.next(), rhs_iter.next());
        if x.is_none() && y.is_none() && carry == 0 {
            break;
        }
        let sum = carry + x.copied().unwrap_or(0) + y.copied().unwrap_or(0);
        reversed.push(if sum % 2 == 1 { '1' } else { '0' });
        carry = sum / 2;
    }

    Ok(reversed.into_iter().rev().collect())
}

/// Reads a binary string into digit values, validating every character.
fn binary_digits(text: &str) -> Result<Vec<u8>, AlgorithmError> {
    if text.is_empty() {
        return Err(AlgorithmError::EmptyBinaryString);
    }
    text.chars()
        .enumerate()
        .map(|(position, found)| match found {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(AlgorithmError::InvalidBinaryDigit { position, found }),
        })
        .collect()
}
