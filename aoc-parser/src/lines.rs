//! Line iteration over a whole puzzle input

use crate::error::{LineError, ParseError};

/// Iterate over the trimmed lines of `input` with their 1-based line numbers
pub fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines().map(str::trim).enumerate().map(|(i, line)| (i + 1, line))
}

/// Parse every non-empty line of `input` with `f`
///
/// The first failure stops the parse and is returned tagged with its line
/// number. Blank lines are skipped.
pub fn parse_lines<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, LineError>
where
    F: FnMut(&'a str) -> Result<T, ParseError>,
{
    lines(input)
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| f(line).map_err(|e| e.at_line(number)))
        .collect()
}
