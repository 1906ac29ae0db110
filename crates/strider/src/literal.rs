//! Literal values appearing in statements.
//!
//! Literals are index keys (`["name"]`, `[0]`) and the right-hand side of
//! rules (`[kind = "leaf"]`).

use std::fmt;

use crate::node::Key;
use crate::value::{Number, Scalar};

/// A quoted string or numeric constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(Number),
}

impl Literal {
    /// Parses the text matched by the number grammar, `[-] digit* [. digit*]`.
    ///
    /// Missing digits read as zero, so `-` and `.` both yield `0`. The text
    /// is read both as an integer and as a float; the integer form is kept
    /// when the two are numerically equal, otherwise the value is a float.
    pub fn parse_number(text: &str) -> Number {
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text),
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        let whole = if whole.is_empty() { "0" } else { whole };

        if fraction.bytes().all(|b| b == b'0') {
            if let Ok(n) = format!("{sign}{whole}").parse::<i64>() {
                return Number::I64(n);
            }
            if sign.is_empty() {
                if let Ok(n) = whole.parse::<u64>() {
                    return Number::U64(n);
                }
            }
        }

        let fraction = if fraction.is_empty() { "0" } else { fraction };
        let float = format!("{sign}{whole}.{fraction}")
            .parse::<f64>()
            .unwrap_or_default();
        canonical(Number::F64(float))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Literal::String(_) => None,
            Literal::Number(n) => Some(*n),
        }
    }

    /// Key this literal names in an indexable container.
    ///
    /// Fractional numbers and integers outside the `i64` range name no key.
    pub fn as_key(&self) -> Option<Key<'_>> {
        match self {
            Literal::String(s) => Some(Key::Str(s)),
            Literal::Number(Number::I64(n)) => Some(Key::Int(*n)),
            Literal::Number(Number::U64(n)) => i64::try_from(*n).ok().map(Key::Int),
            Literal::Number(Number::F64(_)) => None,
        }
    }

    /// Equality against a host scalar.
    ///
    /// Strings equal strings, numbers equal numbers of the same value
    /// whatever their representation. Every cross-kind pairing is unequal.
    pub fn equals_scalar(&self, scalar: &Scalar<'_>) -> bool {
        match (self, scalar) {
            (Literal::String(expected), Scalar::String(actual)) => expected == actual,
            (Literal::Number(expected), Scalar::Number(actual)) => expected.equals(*actual),
            _ => false,
        }
    }
}

/// Integral values that fit an `i64` are stored as `I64`, so equal
/// literals compare equal and render to text that parses back unchanged.
fn canonical(n: Number) -> Number {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    match n {
        Number::U64(u) => i64::try_from(u).map_or(n, Number::I64),
        Number::F64(f) if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) => {
            Number::I64(f as i64)
        }
        other => other,
    }
}

/// Writes `text` as a double-quoted literal, escaping `"` and `\`.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write_quoted(f, s),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<Number> for Literal {
    fn from(n: Number) -> Self {
        Literal::Number(canonical(n))
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(Number::from(n))
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(Number::I64(n))
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Literal::Number(Number::U64(n))
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(canonical(Number::F64(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_integers() {
        assert_eq!(Literal::parse_number("0"), Number::I64(0));
        assert_eq!(Literal::parse_number("42"), Number::I64(42));
        assert_eq!(Literal::parse_number("-7"), Number::I64(-7));
        assert_eq!(Literal::parse_number("007"), Number::I64(7));
        assert_eq!(Literal::parse_number("3.000"), Number::I64(3));
        assert_eq!(Literal::parse_number("3."), Number::I64(3));
    }

    #[test]
    fn fractions_become_floats() {
        assert_eq!(Literal::parse_number("1.5"), Number::F64(1.5));
        assert_eq!(Literal::parse_number("-0.25"), Number::F64(-0.25));
        assert_eq!(Literal::parse_number(".5"), Number::F64(0.5));
    }

    #[test]
    fn missing_digits_read_as_zero() {
        assert_eq!(Literal::parse_number(""), Number::I64(0));
        assert_eq!(Literal::parse_number("-"), Number::I64(0));
        assert_eq!(Literal::parse_number("."), Number::I64(0));
        assert_eq!(Literal::parse_number("-."), Number::I64(0));
    }

    #[test]
    fn overflowing_integers_become_floats() {
        assert_eq!(
            Literal::parse_number("99999999999999999999"),
            Number::F64(1e20)
        );
    }

    #[test]
    fn integral_text_with_tiny_fraction_is_an_integer() {
        assert_eq!(
            Literal::parse_number("1.00000000000000000001"),
            Number::I64(1)
        );
        assert_eq!(
            Literal::parse_number("-2.000000000000000000001"),
            Number::I64(-2)
        );
    }

    #[test]
    fn unsigned_integers_beyond_i64() {
        assert_eq!(
            Literal::parse_number("18446744073709551615"),
            Number::U64(u64::MAX)
        );
    }

    #[test]
    fn conversions_store_integral_values_as_i64() {
        assert_eq!(Literal::from(1.0), Literal::Number(Number::I64(1)));
        assert_eq!(Literal::from(7u64), Literal::Number(Number::I64(7)));
        assert_eq!(Literal::from(Number::F64(-3.0)), Literal::Number(Number::I64(-3)));
        assert_eq!(Literal::from(1e20), Literal::Number(Number::F64(1e20)));
        assert_eq!(Literal::from(u64::MAX), Literal::Number(Number::U64(u64::MAX)));
        assert_eq!(Literal::from(1.0).to_string(), "1");
    }

    #[test]
    fn keys() {
        assert_eq!(Literal::from("a").as_key(), Some(Key::Str("a")));
        assert_eq!(Literal::from(3i64).as_key(), Some(Key::Int(3)));
        assert_eq!(Literal::from(3u64).as_key(), Some(Key::Int(3)));
        assert_eq!(Literal::from(u64::MAX).as_key(), None);
        assert_eq!(Literal::from(1.5).as_key(), None);
    }

    #[test]
    fn scalar_equality_is_same_kind_only() {
        assert!(Literal::from("x").equals_scalar(&Scalar::String("x")));
        assert!(!Literal::from("x").equals_scalar(&Scalar::String("y")));
        assert!(Literal::from(1i64).equals_scalar(&Scalar::Number(Number::F64(1.0))));
        assert!(Literal::from(1i64).equals_scalar(&Scalar::Number(Number::U64(1))));
        assert!(!Literal::from(1i64).equals_scalar(&Scalar::String("1")));
        assert!(!Literal::from("1").equals_scalar(&Scalar::Number(Number::I64(1))));
        assert!(!Literal::from(1i64).equals_scalar(&Scalar::Bool(true)));
        assert!(!Literal::from("").equals_scalar(&Scalar::Null));
    }

    #[test]
    fn display_quotes_and_escapes() {
        assert_eq!(Literal::from("plain").to_string(), "\"plain\"");
        assert_eq!(Literal::from("b\"").to_string(), r#""b\"""#);
        assert_eq!(Literal::from(r"a\b").to_string(), r#""a\\b""#);
        assert_eq!(Literal::from("'").to_string(), "\"'\"");
        assert_eq!(Literal::from(-4i64).to_string(), "-4");
        assert_eq!(Literal::from(0.5).to_string(), "0.5");
    }
}
