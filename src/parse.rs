//! Typed parsing of free-form text into an [`Input`].
//!
//! Each [`InputShape`] has a dedicated reader; nothing here evaluates arbitrary
//! expressions. The accepted syntax mirrors tuple and list literals:
//!
//! - integers: optional sign followed by decimal digits, e.g. `-42`;
//! - sequences: `[1, 2, 3]`, possibly empty, trailing comma allowed;
//! - binary strings: `'1010'`, `"1010"` or bare `1010`;
//! - multiple items are separated by commas and may be wrapped in `( … )`.
//!
//! Positions in errors are byte offsets into the original text.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::ParseError;
use crate::select::{Input, InputShape};

/// Parses `text` as the given shape.
///
/// The number of top-level items is checked before any item is read, so
/// `"1, 2, 3"` for a pair reports [`ParseError::Arity`] rather than a problem with
/// the third item.
///
/// # Examples
///
/// ```
/// use algovault::parse::parse_input;
/// use algovault::select::{Input, InputShape};
/// use num_bigint::BigInt;
///
/// let input = parse_input(InputShape::IntegerPair, "(10, 3)").unwrap();
/// assert_eq!(input, Input::IntegerPair(BigInt::from(10), BigInt::from(3)));
/// ```
pub fn parse_input(shape: InputShape, text: &str) -> Result<Input, ParseError> {
    let (offset, body) = strip_parentheses(text)?;
    let items = split_items(offset, body)?;

    let expected = arity(shape);
    if items.len() != expected {
        return Err(ParseError::Arity {
            expected,
            found: items.len(),
        });
    }

    match (shape, items.as_slice()) {
        (InputShape::Integer, [n]) => Ok(Input::Integer(parse_integer(*n)?)),
        (InputShape::IntegerPair, [a, b]) => {
            Ok(Input::IntegerPair(parse_integer(*a)?, parse_integer(*b)?))
        }
        (InputShape::Sequence, [seq]) => Ok(Input::Sequence(parse_sequence(*seq)?)),
        (InputShape::SequenceAndTarget, [seq, target]) => Ok(Input::SequenceAndTarget(
            parse_sequence(*seq)?,
            parse_integer(*target)?,
        )),
        (InputShape::BinaryPair, [a, b]) => {
            Ok(Input::BinaryPair(parse_binary(*a)?, parse_binary(*b)?))
        }
        _ => Err(ParseError::Arity {
            expected,
            found: items.len(),
        }),
    }
}

fn arity(shape: InputShape) -> usize {
    match shape {
        InputShape::Integer | InputShape::Sequence => 1,
        InputShape::IntegerPair | InputShape::SequenceAndTarget | InputShape::BinaryPair => 2,
    }
}

/// A slice of the input together with the byte offset it starts at.
type Item<'a> = (usize, &'a str);

/// Trims `item`, moving the offset past any leading whitespace.
fn trim_item((offset, text): Item<'_>) -> Item<'_> {
    let trimmed = text.trim_start();
    (offset + text.len() - trimmed.len(), trimmed.trim_end())
}

/// Removes one pair of enclosing parentheses, if present.
fn strip_parentheses(text: &str) -> Result<Item<'_>, ParseError> {
    let (offset, body) = trim_item((0, text));
    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    match (body.strip_prefix('('), body.ends_with(')')) {
        (Some(inner), true) => Ok((offset + 1, &inner[..inner.len() - 1])),
        (Some(_), false) => Err(ParseError::UnexpectedEnd),
        (None, _) => Ok((offset, body)),
    }
}

/// Splits on commas outside brackets and quotes.
///
/// A single trailing comma is tolerated, as in tuple literals.
fn split_items(offset: usize, text: &str) -> Result<Vec<Item<'_>>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0usize;

    for (index, ch) in text.char_indices() {
        match (quote, ch) {
            (Some(open), _) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnexpectedChar {
                    position: offset + index,
                    found: ch,
                })?;
            }
            (None, ',') if depth == 0 => {
                items.push(trim_item((offset + start, &text[start..index])));
                start = index + 1;
            }
            (None, _) => {}
        }
    }

    if quote.is_some() || depth > 0 {
        return Err(ParseError::UnexpectedEnd);
    }

    let last = trim_item((offset + start, &text[start..]));
    if !last.1.is_empty() || items.is_empty() {
        items.push(last);
    }

    if let Some((position, _)) = items.iter().find(|(_, item)| item.is_empty()) {
        return Err(ParseError::UnexpectedChar {
            position: *position,
            found: ',',
        });
    }

    Ok(items)
}

fn parse_integer(item: Item<'_>) -> Result<BigInt, ParseError> {
    let (_, text) = trim_item(item);
    if text.is_empty() {
        return Err(ParseError::UnexpectedEnd);
    }
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidInteger {
            text: text.to_string(),
        });
    }
    BigInt::from_str(text).map_err(|_| ParseError::InvalidInteger {
        text: text.to_string(),
    })
}

fn parse_sequence(item: Item<'_>) -> Result<Vec<BigInt>, ParseError> {
    let (offset, text) = trim_item(item);
    let Some(inner_and_rest) = text.strip_prefix('[') else {
        return Err(match text.chars().next() {
            Some(found) => ParseError::UnexpectedChar {
                position: offset,
                found,
            },
            None => ParseError::UnexpectedEnd,
        });
    };

    let close = inner_and_rest.find(']').ok_or(ParseError::UnexpectedEnd)?;
    let inner = &inner_and_rest[..close];
    let rest = &inner_and_rest[close + 1..];
    if let Some(nested) = inner.find('[') {
        return Err(ParseError::UnexpectedChar {
            position: offset + 1 + nested,
            found: '[',
        });
    }
    if !rest.trim().is_empty() {
        let skipped = rest.len() - rest.trim_start().len();
        return Err(ParseError::TrailingInput {
            position: offset + close + 2 + skipped,
        });
    }

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_items(offset + 1, inner)?
        .into_iter()
        .map(parse_integer)
        .collect()
}

fn parse_binary(item: Item<'_>) -> Result<String, ParseError> {
    let (offset, text) = trim_item(item);
    let Some(open) = text.chars().next().filter(|ch| matches!(*ch, '\'' | '"')) else {
        return Ok(text.to_string());
    };

    let body = &text[1..];
    let close = body.find(open).ok_or(ParseError::UnexpectedEnd)?;
    if close + 1 != body.len() {
        return Err(ParseError::TrailingInput {
            position: offset + close + 2,
        });
    }
    Ok(body[..close].to_string())
}
