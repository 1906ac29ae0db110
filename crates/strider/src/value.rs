//! Runtime values seen while traversing a graph.
//!
//! [`Value`] is the current position of a traversal: either a single host
//! node or the ordered matches produced by a rule. [`Scalar`] is the leaf
//! view a node offers for comparison, and [`Number`] the numeric part of it.

use std::cmp::Ordering;
use std::fmt;

use crate::node::Node;

/// Current value threaded through a program.
///
/// A rule step (`[child = "x"]`) yields [`Value::Matches`]; every other
/// step yields [`Value::Node`]. Matches can be indexed by position and
/// filtered by further rules, but have no fields.
#[derive(Clone)]
pub enum Value<'a> {
    /// A node of the host graph.
    Node(&'a dyn Node),
    /// Elements selected by a rule, in container order.
    Matches(Vec<&'a dyn Node>),
}

impl<'a> Value<'a> {
    /// Name of the kind of value, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Node(node) => node.type_name(),
            Value::Matches(_) => "matches",
        }
    }

    /// Returns the node, unless this is a set of matches.
    pub fn as_node(&self) -> Option<&'a dyn Node> {
        match self {
            Value::Node(node) => Some(*node),
            Value::Matches(_) => None,
        }
    }

    /// Returns the matched elements, if this is the result of a rule.
    pub fn as_matches(&self) -> Option<&[&'a dyn Node]> {
        match self {
            Value::Node(_) => None,
            Value::Matches(items) => Some(items),
        }
    }

    /// Consumes the value, returning the matched elements if any.
    pub fn into_matches(self) -> Option<Vec<&'a dyn Node>> {
        match self {
            Value::Node(_) => None,
            Value::Matches(items) => Some(items),
        }
    }

    /// Leaf view of the node, if it is a scalar.
    pub fn as_scalar(&self) -> Option<Scalar<'a>> {
        self.as_node().and_then(|node| node.as_scalar())
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.as_scalar().and_then(|s| s.as_str())
    }

    pub fn as_number(&self) -> Option<Number> {
        self.as_scalar().and_then(|s| s.as_number())
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(|s| s.as_bool())
    }

    pub fn is_null(&self) -> bool {
        matches!(self.as_scalar(), Some(Scalar::Null))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn describe(node: &dyn Node) -> String {
            match node.as_scalar() {
                Some(scalar) => format!("{scalar:?}"),
                None => node.type_name().to_string(),
            }
        }

        match self {
            Value::Node(node) => write!(f, "Node({})", describe(*node)),
            Value::Matches(items) => {
                let described: Vec<String> = items.iter().map(|n| describe(*n)).collect();
                write!(f, "Matches({})", described.join(", "))
            }
        }
    }
}

/// Leaf value a node exposes for comparison, borrowed from the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Explicit absence of a value.
    Null,
}

impl<'a> Scalar<'a> {
    pub fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::Number(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Comparisons between different variants compare the numeric values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers by value, handling mixed variants.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            // exact for integers beyond f64 precision
            (Number::I64(a), Number::U64(b)) => Some(match u64::try_from(a) {
                Ok(a) => a.cmp(&b),
                Err(_) => Ordering::Less,
            }),
            (Number::U64(_), Number::I64(_)) => other.compare(self).map(Ordering::reverse),

            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Returns `true` if both numbers denote the same value.
    pub fn equals(self, other: Number) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

// Conversions from primitive types
impl From<i8> for Number {
    fn from(n: i8) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i16> for Number {
    fn from(n: i16) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u8> for Number {
    fn from(n: u8) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u16> for Number {
    fn from(n: u16) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<isize> for Number {
    fn from(n: isize) -> Self {
        Number::I64(n as i64)
    }
}
