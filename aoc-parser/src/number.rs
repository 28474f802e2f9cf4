//! Integer conversion on top of [`parse_digits`]

use crate::cursor::{parse_digits, parse_whitespace, peek};
use crate::error::ParseError;
use std::str::FromStr;

/// Convert a digit token into an integer
///
/// `offset` is where the token started and is only used for error reporting.
/// An empty token, a lone `-`, or a value that overflows `T` is a
/// [`ParseError::MalformedNumeral`].
pub fn parse_number<T: FromStr>(token: &str, offset: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::MalformedNumeral {
        token: token.to_string(),
        offset,
    })
}

/// [`parse_digits`] followed by [`parse_number`]
///
/// # Example
///
/// ```
/// use aoc_parser::parse_integer;
///
/// assert_eq!(parse_integer::<i64>("-2, 1", 0), Ok((-2, 2)));
/// assert!(parse_integer::<i64>("x", 0).is_err());
/// ```
pub fn parse_integer<T: FromStr>(line: &str, cursor: usize) -> Result<(T, usize), ParseError> {
    let (token, next) = parse_digits(line, cursor);
    let value = parse_number(token, cursor)?;
    Ok((value, next))
}

/// Parse whitespace-separated integers
///
/// Leading whitespace is skipped. Stops at the end of the line or at the first
/// character that cannot start a numeral, returning the cursor positioned on
/// that character.
pub fn parse_integers<T: FromStr>(
    line: &str,
    cursor: usize,
) -> Result<(Vec<T>, usize), ParseError> {
    let mut values = Vec::new();
    let mut cursor = parse_whitespace(line, cursor);

    while let Some(c) = peek(line, cursor) {
        if !(c.is_ascii_digit() || c == '-') {
            break;
        }
        let (value, next) = parse_integer(line, cursor)?;
        values.push(value);
        cursor = parse_whitespace(line, next);
    }

    Ok((values, cursor))
}
