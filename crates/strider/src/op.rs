//! Comparison operators for index rules.
//!
//! The language has a single operator, equality, written `=`. [`Operator`]
//! still exists as its own type so that the parser, the rule instruction and
//! the renderer agree on one symbol table.

use std::fmt;

use crate::literal::Literal;
use crate::value::Value;

/// Comparison operator of an index rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Same-kind equality (see [`Literal::equals_scalar`]).
    Equals,
}

impl Operator {
    /// Every operator the grammar accepts.
    pub const ALL: [Operator; 1] = [Operator::Equals];

    /// Returns the symbol this operator is written with.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equals => "=",
        }
    }

    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Compares the value reached by a rule's left-hand chain with its
    /// right-hand literal.
    ///
    /// Only scalars compare; records, containers and match sets never match.
    pub fn evaluate(self, value: &Value<'_>, rhs: &Literal) -> bool {
        match self {
            Operator::Equals => value
                .as_scalar()
                .is_some_and(|scalar| rhs.equals_scalar(&scalar)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn symbols() {
        assert_eq!(Operator::Equals.symbol(), "=");
        assert_eq!(Operator::from_symbol("="), Some(Operator::Equals));
        assert_eq!(Operator::from_symbol("=="), None);
        assert_eq!(Operator::from_symbol("~"), None);
        assert_eq!(Operator::Equals.to_string(), "=");
    }

    #[test]
    fn equals_scalars() {
        let one = 1i64;
        let text = String::from("1");
        assert!(Operator::Equals.evaluate(&Value::Node(&one), &Literal::from(1i64)));
        assert!(Operator::Equals.evaluate(&Value::Node(&one), &Literal::from(1.0)));
        assert!(!Operator::Equals.evaluate(&Value::Node(&one), &Literal::from("1")));
        assert!(Operator::Equals.evaluate(&Value::Node(&text), &Literal::from("1")));
        assert!(!Operator::Equals.evaluate(&Value::Node(&text), &Literal::from(1i64)));
    }

    #[test]
    fn non_scalars_never_match() {
        let list = vec![1i64];
        assert!(!Operator::Equals.evaluate(&Value::Node(&list), &Literal::from(1i64)));

        let one = 1i64;
        let matches = Value::Matches(vec![&one as &dyn Node]);
        assert!(!Operator::Equals.evaluate(&matches, &Literal::from(1i64)));
    }
}
