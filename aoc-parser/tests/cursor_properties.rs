//! Property-based tests for the cursor parser primitives
//!
//! **Feature: cursor-parser**

use aoc_parser::{ParseError, expect, parse_digits, parse_integers, parse_whitespace};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Matching literal advances by its length**
    /// *For any* prefix, literal and suffix, `expect` positioned on the
    /// literal returns the cursor just past it.
    #[test]
    fn prop_expect_advances_past_literal(
        prefix in "[a-z0-9 ]{0,8}",
        literal in "[a-zA-Z:@,=()|-]{1,6}",
        suffix in "[a-z0-9 ]{0,8}",
    ) {
        let line = format!("{prefix}{literal}{suffix}");
        let cursor = prefix.len();
        prop_assert_eq!(expect(&line, cursor, &literal), Ok(cursor + literal.len()));
    }

    /// **Property 2: First-character mismatch is reported at the cursor**
    /// *For any* line whose next character differs from the literal's first
    /// character, `expect` fails with `UnexpectedCharacter` at the cursor.
    #[test]
    fn prop_expect_mismatch_at_cursor(
        line in "[a-m]{1,10}",
        literal in "[n-z]{1,4}",
        cursor_seed in 0usize..10,
    ) {
        let cursor = cursor_seed % line.len();
        let result = expect(&line, cursor, &literal);
        match result {
            Err(ParseError::UnexpectedCharacter { expected, actual, offset }) => {
                prop_assert_eq!(offset, cursor);
                prop_assert_eq!(Some(expected), literal.chars().next());
                prop_assert_eq!(Some(actual), line[cursor..].chars().next());
            }
            other => prop_assert!(false, "Expected UnexpectedCharacter, got {:?}", other),
        }
    }

    /// **Property 3: Whitespace skipping is idempotent**
    #[test]
    fn prop_parse_whitespace_idempotent(line in "[ \ta-c]{0,16}", cursor_seed in 0usize..17) {
        let cursor = cursor_seed.min(line.len());
        let once = parse_whitespace(&line, cursor);
        prop_assert_eq!(parse_whitespace(&line, once), once);
        prop_assert!(once >= cursor && once <= line.len());
    }

    /// **Property 4: Digit runs are consumed up to the first non-digit**
    /// *For any* digit run `D`, optionally signed, `parse_digits(D + "a", 0)`
    /// returns `(D, len(D))`.
    #[test]
    fn prop_parse_digits_stops_at_non_digit(
        negative in any::<bool>(),
        digits in "[0-9]{0,12}",
    ) {
        let token = if negative { format!("-{digits}") } else { digits.clone() };
        let line = format!("{token}a");
        prop_assert_eq!(parse_digits(&line, 0), (token.as_str(), token.len()));
    }

    /// **Property 5: Cursor never moves backwards or past the end**
    #[test]
    fn prop_parse_digits_cursor_bounds(line in "[-0-9 a]{0,12}", cursor_seed in 0usize..13) {
        let cursor = cursor_seed.min(line.len());
        let (token, next) = parse_digits(&line, cursor);
        prop_assert!(next >= cursor && next <= line.len());
        prop_assert_eq!(token, &line[cursor..next]);
    }

    /// **Property 6: Whitespace-separated integers survive formatting**
    #[test]
    fn prop_parse_integers_reads_back_values(
        values in prop::collection::vec(any::<i64>(), 0..8),
        gap in " {1,3}",
    ) {
        let line = values.iter().map(i64::to_string).collect::<Vec<_>>().join(gap.as_str());
        let (parsed, cursor) = parse_integers::<i64>(&line, 0).unwrap();
        prop_assert_eq!(parsed, values);
        prop_assert_eq!(cursor, line.len());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_failed_expect_leaves_cursor_untouched() {
        let line = "Time:      7  15   30";
        let cursor = 0;
        assert!(expect(line, cursor, "Distance:").is_err());
        // The caller still holds the old cursor and can continue from it
        assert_eq!(expect(line, cursor, "Time:"), Ok(5));
    }

    #[test]
    fn test_primitives_compose_on_one_line() {
        let line = "19, 13, 30 @ -2, 1, -2";
        let (x, cursor) = parse_digits(line, 0);
        let cursor = expect(line, cursor, ",").unwrap();
        let cursor = parse_whitespace(line, cursor);
        let (y, cursor) = parse_digits(line, cursor);
        assert_eq!((x, y), ("19", "13"));
        assert_eq!(&line[cursor..cursor + 1], ",");
    }
}
