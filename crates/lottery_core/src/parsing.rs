//! Parsing of user-provided, semicolon-separated number lists.
//!
//! Lists such as `"20; 40; 0"` or `"120; 140; -100"` are accepted. Spaces are
//! ignored, negative numbers are allowed and `.` is the only decimal
//! separator. Commas are rejected outright: `"0,5; 0,5"` is ambiguous between
//! a decimal comma and a list separator.

use thiserror::Error;

/// Separator between list entries.
pub const LIST_SEPARATOR: char = ';';

/// Errors from parsing a number list.
///
/// # Examples
/// ```
/// use lottery_core::parsing::{parse_number_list, ParseError};
///
/// let err = parse_number_list("1; abc").unwrap_err();
/// assert_eq!(err, ParseError::InvalidNumber("abc".to_string()));
/// assert_eq!(err.to_string(), "Invalid number: 'abc'.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("Empty list.")]
    Empty,

    /// Input contained a comma.
    #[error("Use '.' as decimal separator (commas are not allowed).")]
    CommaSeparator,

    /// Input contained only separators.
    #[error("No numbers found in list.")]
    NoNumbers,

    /// A segment did not parse as a finite number.
    #[error("Invalid number: '{0}'.")]
    InvalidNumber(String),
}

/// Parses a semicolon-separated list of finite numbers.
///
/// Empty segments (e.g. a trailing `;`) are skipped. The first segment that
/// is not a finite number fails the whole parse.
///
/// # Errors
///
/// Returns [`ParseError`] when the input is empty, contains a comma, holds no
/// numbers, or holds a segment that is not a finite number.
///
/// # Examples
/// ```
/// use lottery_core::parsing::parse_number_list;
///
/// assert_eq!(parse_number_list("20; 40; 0").unwrap(), vec![20.0, 40.0, 0.0]);
/// assert_eq!(parse_number_list(" -1.5 ;2;").unwrap(), vec![-1.5, 2.0]);
/// assert!(parse_number_list("0,5").is_err());
/// ```
pub fn parse_number_list(input: &str) -> Result<Vec<f64>, ParseError> {
    let raw = input.trim();

    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    if raw.contains(',') {
        return Err(ParseError::CommaSeparator);
    }

    let parts: Vec<&str> = raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(ParseError::NoNumbers);
    }

    parts
        .into_iter()
        .map(|part| match part.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ParseError::InvalidNumber(part.to_string())),
        })
        .collect()
}

/// Formats numbers back into a `"a; b; c"` list.
///
/// # Examples
/// ```
/// use lottery_core::parsing::format_number_list;
///
/// assert_eq!(format_number_list(&[20.0, 0.5, -100.0]), "20; 0.5; -100");
/// ```
pub fn format_number_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
