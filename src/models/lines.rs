//! Line highlight specifiers.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Lines to highlight on a file or blame page.
///
/// Absence is expressed as `Option<LinesSpecifier>::None`. Line numbers are
/// 1-based; `start <= end` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinesSpecifier {
    /// A single line.
    Line(u32),
    /// An inclusive range of lines.
    Range(u32, u32),
}

impl LinesSpecifier {
    /// Returns the line numbers in order: one for a single line, two for a range.
    #[must_use]
    pub fn numbers(self) -> Vec<u32> {
        match self {
            Self::Line(line) => vec![line],
            Self::Range(start, end) => vec![start, end],
        }
    }
}

impl fmt::Display for LinesSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => write!(f, "{line}"),
            Self::Range(start, end) => write!(f, "{start}-{end}"),
        }
    }
}

impl FromStr for LinesSpecifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('-') {
            Some((start, end)) => Ok(Self::Range(parse_line(start, s)?, parse_line(end, s)?)),
            None => Ok(Self::Line(parse_line(s, s)?)),
        }
    }
}

fn parse_line(number: &str, spec: &str) -> Result<u32> {
    match number.trim().parse::<u32>() {
        Ok(line) if line > 0 => Ok(line),
        _ => Err(Error::InvalidInput(format!(
            "Invalid lines: {spec}. Expected a line number or a range like 1-2"
        ))),
    }
}

/// Parses the `<lines>` argument of the command line.
///
/// Empty or absent input means no highlight; `"N"` is a single line and
/// `"N-M"` an inclusive range.
///
/// # Examples
///
/// ```rust
/// use vcslinks::{LinesSpecifier, parse_lines_spec};
///
/// assert_eq!(parse_lines_spec(None).unwrap(), None);
/// assert_eq!(parse_lines_spec(Some("1")).unwrap(), Some(LinesSpecifier::Line(1)));
/// assert_eq!(parse_lines_spec(Some("1-2")).unwrap(), Some(LinesSpecifier::Range(1, 2)));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a line number is not a positive integer.
pub fn parse_lines_spec(text: Option<&str>) -> Result<Option<LinesSpecifier>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(spec) => spec.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absent() {
        assert_eq!(parse_lines_spec(None).unwrap(), None);
        assert_eq!(parse_lines_spec(Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_single_line() {
        assert_eq!(
            parse_lines_spec(Some("42")).unwrap(),
            Some(LinesSpecifier::Line(42))
        );
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_lines_spec(Some("1-2")).unwrap(),
            Some(LinesSpecifier::Range(1, 2))
        );
    }

    #[test]
    fn test_parse_reversed_range_is_kept() {
        assert_eq!(
            parse_lines_spec(Some("9-3")).unwrap(),
            Some(LinesSpecifier::Range(9, 3))
        );
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["abc", "0", "1-", "-2", "1-2-3", "1.5"] {
            assert!(
                matches!(parse_lines_spec(Some(bad)), Err(Error::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_input() {
        assert_eq!(LinesSpecifier::Line(7).to_string(), "7");
        assert_eq!(LinesSpecifier::Range(1, 12).to_string(), "1-12");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(LinesSpecifier::Line(3).numbers(), vec![3]);
        assert_eq!(LinesSpecifier::Range(3, 5).numbers(), vec![3, 5]);
    }
}
