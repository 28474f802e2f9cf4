//! Cursor Parser
//!
//! Small, composable primitives for scanning a single line of puzzle input
//! left to right. The line is never mutated and the cursor is a plain byte
//! offset owned by the caller: each operation takes it by value and returns
//! the advanced cursor, so a failed operation leaves the caller's cursor
//! exactly where it was.
//!
//! # Primitives
//!
//! - [`expect`] matches a literal
//! - [`parse_whitespace`] skips a (possibly empty) whitespace run
//! - [`parse_digits`] scans an optionally signed digit run into a token
//!
//! On top of those sit a few combinators: [`take`], [`parse_while`], [`expect_end`],
//! [`parse_integer`], [`parse_integers`] and the line helpers
//! [`lines`] / [`parse_lines`].
//!
//! # Example
//!
//! ```
//! use aoc_parser::{expect, parse_integer, parse_whitespace, ParseError};
//!
//! fn card_id(line: &str) -> Result<u32, ParseError> {
//!     let cursor = expect(line, 0, "Card")?;
//!     let cursor = parse_whitespace(line, cursor);
//!     let (id, cursor) = parse_integer(line, cursor)?;
//!     expect(line, cursor, ":")?;
//!     Ok(id)
//! }
//!
//! assert_eq!(card_id("Card  12: 1 2 | 3"), Ok(12));
//! assert!(card_id("Crad 1:").is_err());
//! ```
//!
//! # Dangling signs
//!
//! [`parse_digits`] accepts a `-` that is not followed by any digit and
//! returns it as the token `"-"`. It is rejected later, when the token is
//! converted with [`parse_number`].

mod cursor;
mod error;
mod lines;
mod number;

pub use cursor::{
    at_end, expect, expect_end, parse_digits, parse_whitespace, parse_while, peek, take,
};
pub use error::{LineError, ParseError};
pub use lines::{lines, parse_lines};
pub use number::{parse_integer, parse_integers, parse_number};
