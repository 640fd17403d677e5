//! Typed generic (elaboration-time parameter) values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed value bound to a top-level generic at elaboration time.
///
/// The `Display` form is the canonical textual rendering a toolchain sees:
/// booleans as `true`/`false`, integers and reals in decimal, strings and
/// time literals verbatim. How that text is escaped on a command line is a
/// backend concern, not part of the value itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GenericValue {
    /// A boolean generic.
    Bool(bool),
    /// An integer generic.
    Integer(i64),
    /// A real-valued generic.
    Real(f64),
    /// A string generic, passed through verbatim.
    Str(String),
    /// A time literal such as `10 ns`, passed through verbatim.
    Time(String),
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Bool(b) => write!(f, "{b}"),
            GenericValue::Integer(i) => write!(f, "{i}"),
            GenericValue::Real(r) => write!(f, "{r}"),
            GenericValue::Str(s) | GenericValue::Time(s) => f.write_str(s),
        }
    }
}

impl From<bool> for GenericValue {
    fn from(value: bool) -> Self {
        GenericValue::Bool(value)
    }
}

impl From<i64> for GenericValue {
    fn from(value: i64) -> Self {
        GenericValue::Integer(value)
    }
}

impl From<f64> for GenericValue {
    fn from(value: f64) -> Self {
        GenericValue::Real(value)
    }
}

impl From<&str> for GenericValue {
    fn from(value: &str) -> Self {
        GenericValue::Str(value.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(value: String) -> Self {
        GenericValue::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_renders_canonical_tokens() {
        assert_eq!(GenericValue::Bool(true).to_string(), "true");
        assert_eq!(GenericValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn integer_renders_decimal() {
        assert_eq!(GenericValue::Integer(5).to_string(), "5");
        assert_eq!(GenericValue::Integer(-42).to_string(), "-42");
    }

    #[test]
    fn real_renders_decimal() {
        assert_eq!(GenericValue::Real(1.5).to_string(), "1.5");
    }

    #[test]
    fn string_passes_through() {
        assert_eq!(GenericValue::Str("a,b".to_string()).to_string(), "a,b");
    }

    #[test]
    fn time_literal_passes_through() {
        assert_eq!(GenericValue::Time("10 ns".to_string()).to_string(), "10 ns");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(GenericValue::from(true), GenericValue::Bool(true));
        assert_eq!(GenericValue::from(7i64), GenericValue::Integer(7));
        assert_eq!(GenericValue::from("x"), GenericValue::Str("x".to_string()));
    }

    #[test]
    fn serde_roundtrip() {
        let value = GenericValue::Time("100 ps".to_string());
        let json = serde_json::to_string(&value).unwrap();
        let back: GenericValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
