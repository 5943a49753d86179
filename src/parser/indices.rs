//! Index-list parsing.
//!
//! Index text is one or more ASCII digit runs separated by ASCII whitespace,
//! e.g. `"1 2 3"`. Order is preserved and duplicates are kept.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

// ASCII digits and ASCII whitespace only; `\d` and `\s` are Unicode-aware.
static INDEX_LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(?:(?-u:\s)+[0-9]+)*$")
        .unwrap_or_else(|e| panic!("Invalid index list regex: {e}"))
});

static INDEX_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\s)+").unwrap_or_else(|e| panic!("Invalid index separator regex: {e}"))
});

/// Parse a whitespace separated list of task indices.
///
/// # Errors
///
/// Returns [`ParseError::InvalidIndexFormat`] if the trimmed text is anything
/// other than digit runs separated by whitespace (this includes empty text),
/// and [`ParseError::IndexOverflow`] if a number does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use gtd::parser::parse_indices;
///
/// assert_eq!(parse_indices(" 3 1 3 ").unwrap(), vec![3, 1, 3]);
/// assert!(parse_indices("1a").is_err());
/// ```
pub fn parse_indices(text: &str) -> Result<Vec<usize>, ParseError> {
    let trimmed = text.trim();
    if !INDEX_LIST_PATTERN.is_match(trimmed) {
        return Err(ParseError::InvalidIndexFormat {
            input: trimmed.to_string(),
        });
    }

    INDEX_SEPARATOR
        .split(trimmed)
        .map(|token| {
            token.parse::<usize>().map_err(|_| ParseError::IndexOverflow {
                token: token.to_string(),
            })
        })
        .collect()
}
