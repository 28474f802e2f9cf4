//! Cursor-threaded scanning primitives
//!
//! Every function takes the line and the current cursor by value and hands
//! back the advanced cursor. Nothing is remembered between calls, so callers
//! can interleave these freely while walking a line left to right.

use crate::error::ParseError;

/// Match `literal` at `cursor`, returning the cursor just past it
///
/// Characters are compared one at a time. The first mismatch is reported as
/// [`ParseError::UnexpectedCharacter`]; running off the end of the line before
/// the literal is exhausted is [`ParseError::OutOfBounds`].
///
/// # Example
///
/// ```
/// use aoc_parser::expect;
///
/// assert_eq!(expect("Card 1:", 0, "Card"), Ok(4));
/// assert!(expect("012", 0, "1").is_err());
/// ```
pub fn expect(line: &str, cursor: usize, literal: &str) -> Result<usize, ParseError> {
    debug_assert!(!literal.is_empty(), "expect called with an empty literal");

    let rest = remaining(line, cursor)?;
    let mut actual = rest.char_indices();

    for expected in literal.chars() {
        let Some((index, found)) = actual.next() else {
            return Err(ParseError::OutOfBounds {
                offset: line.len(),
                len: line.len(),
            });
        };
        if found != expected {
            return Err(ParseError::UnexpectedCharacter {
                expected,
                actual: found,
                offset: cursor + index,
            });
        }
    }

    Ok(cursor + literal.len())
}

/// Skip a run of whitespace, possibly empty
///
/// Never fails. A cursor at or beyond the end of the line is returned as is.
pub fn parse_whitespace(line: &str, cursor: usize) -> usize {
    let Some(rest) = line.get(cursor..) else {
        return cursor;
    };
    let skipped = rest
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(index, _)| index);
    cursor + skipped
}

/// Consume an optional `-` followed by a run of ASCII digits
///
/// Returns the consumed token and the advanced cursor. The token can be empty
/// when no numeral starts at `cursor`, and a `-` with no digits after it comes
/// back as the one-character token `"-"`. Validation is left to the caller,
/// usually through [`parse_number`](crate::parse_number).
///
/// # Example
///
/// ```
/// use aoc_parser::parse_digits;
///
/// assert_eq!(parse_digits("-012", 0), ("-012", 4));
/// assert_eq!(parse_digits("1a", 0), ("1", 1));
/// assert_eq!(parse_digits("a", 0), ("", 0));
/// ```
pub fn parse_digits(line: &str, cursor: usize) -> (&str, usize) {
    let Some(rest) = line.get(cursor..) else {
        return ("", cursor);
    };
    let bytes = rest.as_bytes();

    let sign = usize::from(bytes.first() == Some(&b'-'));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    let end = sign + digits;
    (&rest[..end], cursor + end)
}

/// Consume the longest run of characters satisfying `pred`, possibly empty
///
/// # Example
///
/// ```
/// use aoc_parser::parse_while;
///
/// let line = "seed-to-soil map:";
/// assert_eq!(parse_while(line, 0, |c| c.is_ascii_alphabetic()), ("seed", 4));
/// ```
pub fn parse_while(line: &str, cursor: usize, pred: impl Fn(char) -> bool) -> (&str, usize) {
    let Some(rest) = line.get(cursor..) else {
        return ("", cursor);
    };
    let end = rest
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(rest.len(), |(index, _)| index);
    (&rest[..end], cursor + end)
}

/// Take exactly `width` characters starting at `cursor`
///
/// Used for fixed-width fields such as card hands or node labels.
pub fn take(line: &str, cursor: usize, width: usize) -> Result<(&str, usize), ParseError> {
    let rest = remaining(line, cursor)?;
    let end = match rest.char_indices().nth(width) {
        Some((index, _)) => index,
        None if rest.chars().count() == width => rest.len(),
        None => {
            return Err(ParseError::OutOfBounds {
                offset: line.len(),
                len: line.len(),
            });
        }
    };
    Ok((&rest[..end], cursor + end))
}

/// Require that nothing is left on the line
pub fn expect_end(line: &str, cursor: usize) -> Result<(), ParseError> {
    match line.get(cursor..) {
        Some("") => Ok(()),
        Some(rest) => Err(ParseError::TrailingInput {
            offset: cursor,
            rest: rest.to_string(),
        }),
        None => Err(ParseError::OutOfBounds {
            offset: cursor,
            len: line.len(),
        }),
    }
}

/// Whether the cursor has consumed the whole line
#[inline]
pub fn at_end(line: &str, cursor: usize) -> bool {
    cursor >= line.len()
}

/// Character at `cursor`, if any
#[inline]
pub fn peek(line: &str, cursor: usize) -> Option<char> {
    line.get(cursor..)?.chars().next()
}

fn remaining(line: &str, cursor: usize) -> Result<&str, ParseError> {
    line.get(cursor..).ok_or(ParseError::OutOfBounds {
        offset: cursor,
        len: line.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_single_characters() {
        assert_eq!(expect("012", 0, "0"), Ok(1));
        assert_eq!(expect("012", 1, "1"), Ok(2));
        assert_eq!(expect("012", 2, "2"), Ok(3));
    }

    #[test]
    fn test_expect_mismatch_reports_position() {
        assert_eq!(
            expect("012", 0, "1"),
            Err(ParseError::UnexpectedCharacter {
                expected: '1',
                actual: '0',
                offset: 0,
            })
        );

        assert_eq!(
            expect("Card 1", 0, "Cart"),
            Err(ParseError::UnexpectedCharacter {
                expected: 't',
                actual: 'd',
                offset: 3,
            })
        );
    }

    #[test]
    fn test_expect_past_end() {
        assert_eq!(
            expect("Tim", 0, "Time:"),
            Err(ParseError::OutOfBounds { offset: 3, len: 3 })
        );
        assert_eq!(
            expect("abc", 3, "d"),
            Err(ParseError::OutOfBounds { offset: 3, len: 3 })
        );
        assert_eq!(
            expect("abc", 7, "d"),
            Err(ParseError::OutOfBounds { offset: 7, len: 3 })
        );
    }

    #[test]
    fn test_expect_reports_mismatch_before_end() {
        // The mismatch comes before the line runs out
        assert!(matches!(
            expect("ab", 0, "xyz"),
            Err(ParseError::UnexpectedCharacter { offset: 0, .. })
        ));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_whitespace("a   b", 1), 4);
        assert_eq!(parse_whitespace("a\t b", 1), 3);
        assert_eq!(parse_whitespace("ab", 1), 1);
        assert_eq!(parse_whitespace("a  ", 1), 3);
        assert_eq!(parse_whitespace("", 0), 0);
        assert_eq!(parse_whitespace("a", 5), 5);
    }

    #[test]
    fn test_parse_digits_seed_cases() {
        assert_eq!(parse_digits("012", 0), ("012", 3));
        assert_eq!(parse_digits("-012", 0), ("-012", 4));
        assert_eq!(parse_digits("-012", 1), ("012", 4));
        assert_eq!(parse_digits("a", 0), ("", 0));
        assert_eq!(parse_digits("1a", 0), ("1", 1));
    }

    #[test]
    fn test_parse_digits_dangling_sign() {
        assert_eq!(parse_digits("-", 0), ("-", 1));
        assert_eq!(parse_digits("- 3", 0), ("-", 1));
        assert_eq!(parse_digits("--3", 0), ("-", 1));
    }

    #[test]
    fn test_parse_digits_at_end() {
        assert_eq!(parse_digits("12", 2), ("", 2));
        assert_eq!(parse_digits("12", 9), ("", 9));
    }

    #[test]
    fn test_parse_while() {
        let line = "light-to-temperature map:";
        let (source, cursor) = parse_while(line, 0, |c| c.is_ascii_alphabetic());
        assert_eq!((source, cursor), ("light", 5));
        assert_eq!(parse_while(line, cursor, char::is_alphabetic), ("", 5));
        assert_eq!(parse_while(line, 99, char::is_alphabetic), ("", 99));
    }

    #[test]
    fn test_take() {
        assert_eq!(take("32T3K 765", 0, 5), Ok(("32T3K", 5)));
        assert_eq!(take("AAA", 0, 3), Ok(("AAA", 3)));
        assert_eq!(take("AAA", 3, 0), Ok(("", 3)));
        assert_eq!(
            take("AA", 0, 3),
            Err(ParseError::OutOfBounds { offset: 2, len: 2 })
        );
    }

    #[test]
    fn test_expect_end() {
        assert_eq!(expect_end("12", 2), Ok(()));
        assert_eq!(
            expect_end("12 x", 2),
            Err(ParseError::TrailingInput {
                offset: 2,
                rest: " x".to_string(),
            })
        );
    }

    #[test]
    fn test_peek_and_at_end() {
        assert_eq!(peek("a|b", 1), Some('|'));
        assert_eq!(peek("a", 1), None);
        assert!(at_end("a", 1));
        assert!(!at_end("a", 0));
    }
}
