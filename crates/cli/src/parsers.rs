use lines_engine::range::LineRange;
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1)
}

/// Parse a `usize` that may be zero.
///
/// # Errors
/// Returns an error if the input string is not a valid number.
pub fn parse_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0)
}

/// Parse a line range: `N`, `N-`, `-M` or `N-M`.
///
/// # Errors
/// Returns an error if the range is malformed, contains a zero, or is out of order.
pub fn parse_range(s: &str) -> Result<LineRange, String> {
    s.parse::<LineRange>().map_err(|err| err.to_string())
}
