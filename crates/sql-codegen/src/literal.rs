//! Coercion of raw field text into SQL literals.
//!
//! Numbers are emitted bare and everything else is wrapped in single quotes.
//! Embedded quotes are not escaped: the output is meant for reading and
//! learning, not for feeding untrusted input to a database.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns `raw` unchanged when it is a finite number, `'raw'` otherwise.
///
/// The empty string is not a number and becomes `''`.
pub fn format_literal(raw: &str) -> String {
    if is_numeric(raw) {
        raw.to_string()
    } else {
        format!("'{raw}'")
    }
}

/// `inf` and `NaN` parse as `f64` but are not SQL numbers.
pub fn is_numeric(raw: &str) -> bool {
    raw.parse::<f64>().is_ok_and(f64::is_finite)
}

/// A value already in its SQL spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal(String);

impl Literal {
    /// Applies [`format_literal`] to raw field text.
    pub fn from_raw(raw: &str) -> Self {
        Literal(format_literal(raw))
    }

    /// Keeps text the user already wrote as SQL.
    pub fn verbatim(sql: &str) -> Self {
        Literal(sql.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_pass_through() {
        for raw in ["42", "-3.5", "0", "1e5", "+7", ".5"] {
            assert_eq!(format_literal(raw), raw, "{raw} should stay bare");
        }
    }

    #[test]
    fn test_text_is_quoted() {
        assert_eq!(format_literal("abc"), "'abc'");
        assert_eq!(format_literal("Alice"), "'Alice'");
        assert_eq!(format_literal("42abc"), "'42abc'");
        assert_eq!(format_literal(" 42"), "' 42'");
    }

    #[test]
    fn test_empty_string_is_quoted() {
        assert_eq!(format_literal(""), "''");
    }

    #[test]
    fn test_non_finite_floats_are_text() {
        assert_eq!(format_literal("inf"), "'inf'");
        assert_eq!(format_literal("NaN"), "'NaN'");
        assert_eq!(format_literal("infinity"), "'infinity'");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        assert_eq!(format_literal("O'Brien"), "'O'Brien'");
    }

    #[test]
    fn test_literal_wrappers() {
        assert_eq!(Literal::from_raw("30").as_str(), "30");
        assert_eq!(Literal::from_raw("x").to_string(), "'x'");
        assert_eq!(Literal::verbatim("'John'").as_str(), "'John'");
    }
}
