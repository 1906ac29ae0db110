//! Compiled steps of a selector statement.
//!
//! Each step takes the current [`Value`] and produces the next one or a
//! [`TraversalError`]. Steps are immutable once built and can be applied to
//! any number of graphs.

use std::fmt;

use crate::class;
use crate::error::TraversalError;
use crate::literal::{write_quoted, Literal};
use crate::node::Node;
use crate::op::Operator;
use crate::value::Value;

/// Selects a named field of a record: `.owner`, `{"display name"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInstruction {
    name: String,
}

impl MemberInstruction {
    pub fn new(name: impl Into<String>) -> Self {
        MemberInstruction { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply<'a>(&self, value: &Value<'a>) -> Result<Value<'a>, TraversalError> {
        let node = match value {
            Value::Node(node) => *node,
            Value::Matches(_) => {
                return Err(TraversalError::type_mismatch("record", value.type_name()))
            }
        };
        let record = node
            .as_record()
            .ok_or_else(|| TraversalError::type_mismatch("record", node.type_name()))?;

        match record.field(&self.name) {
            Some(field) => Ok(Value::Node(field)),
            None => Err(TraversalError::UndefinedField {
                node: node.type_name(),
                name: self.name.clone(),
            }),
        }
    }
}

/// Selects an entry of a container by position or key: `[0]`, `["id"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexInstruction {
    key: Literal,
}

impl IndexInstruction {
    pub fn new(key: impl Into<Literal>) -> Self {
        IndexInstruction { key: key.into() }
    }

    pub fn key(&self) -> &Literal {
        &self.key
    }

    /// Looks the key up in the current node.
    ///
    /// Match sets produced by a rule are indexed by position only.
    pub fn apply<'a>(&self, value: &Value<'a>) -> Result<Value<'a>, TraversalError> {
        let entry = match value {
            Value::Node(node) => {
                let node: &'a dyn Node = *node;
                let indexable = node
                    .as_indexable()
                    .ok_or_else(|| TraversalError::type_mismatch("indexable", node.type_name()))?;
                self.key.as_key().and_then(|key| indexable.entry(key))
            }
            Value::Matches(items) => self
                .key
                .as_key()
                .and_then(|key| key.position())
                .and_then(|position| items.get(position).copied()),
        };

        entry.map(Value::Node).ok_or_else(|| self.undefined())
    }

    fn undefined(&self) -> TraversalError {
        TraversalError::UndefinedIndex {
            key: self.key.clone(),
        }
    }
}

/// Keeps the elements of a container whose left-hand chain compares equal
/// to a literal: `[kind = "leaf"]`, `[owner.name = "ada"]`.
///
/// An element on which the chain fails is not a match. An empty chain
/// compares the element itself.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRule {
    lhs: Vec<Instruction>,
    operator: Operator,
    rhs: Literal,
}

impl IndexRule {
    pub fn new(lhs: Vec<Instruction>, operator: Operator, rhs: impl Into<Literal>) -> Self {
        IndexRule {
            lhs,
            operator,
            rhs: rhs.into(),
        }
    }

    pub fn lhs(&self) -> &[Instruction] {
        &self.lhs
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn rhs(&self) -> &Literal {
        &self.rhs
    }

    /// Filters the current node's elements, keeping container order.
    ///
    /// Zero matches is a success with an empty set.
    pub fn apply<'a>(&self, value: &Value<'a>) -> Result<Value<'a>, TraversalError> {
        let matches: Vec<&'a dyn Node> = match value {
            Value::Node(node) => {
                let node: &'a dyn Node = *node;
                let iterable = node
                    .as_iterable()
                    .ok_or_else(|| TraversalError::type_mismatch("iterable", node.type_name()))?;
                iterable
                    .elements()
                    .filter(|element| self.matches(*element))
                    .collect()
            }
            Value::Matches(items) => items
                .iter()
                .copied()
                .filter(|element| self.matches(*element))
                .collect(),
        };

        tracing::trace!(rule = %self, matched = matches.len(), "rule applied");
        Ok(Value::Matches(matches))
    }

    /// Runs the left-hand chain on one element and compares the result.
    pub fn matches(&self, element: &dyn Node) -> bool {
        let reached = self
            .lhs
            .iter()
            .try_fold(Value::Node(element), |current, step| step.apply(&current));

        match reached {
            Ok(value) => self.operator.evaluate(&value, &self.rhs),
            Err(_) => false,
        }
    }
}

/// One compiled step.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Member(MemberInstruction),
    Index(IndexInstruction),
    Rule(IndexRule),
}

impl Instruction {
    /// Shorthand for a member step.
    pub fn member(name: impl Into<String>) -> Self {
        Instruction::Member(MemberInstruction::new(name))
    }

    /// Shorthand for an index step.
    pub fn index(key: impl Into<Literal>) -> Self {
        Instruction::Index(IndexInstruction::new(key))
    }

    /// Shorthand for an equality rule.
    pub fn rule(lhs: Vec<Instruction>, rhs: impl Into<Literal>) -> Self {
        Instruction::Rule(IndexRule::new(lhs, Operator::Equals, rhs))
    }

    pub fn apply<'a>(&self, value: &Value<'a>) -> Result<Value<'a>, TraversalError> {
        match self {
            Instruction::Member(member) => member.apply(value),
            Instruction::Index(index) => index.apply(value),
            Instruction::Rule(rule) => rule.apply(value),
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Instruction::Member(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Instruction::Index(_))
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Instruction::Rule(_))
    }

    fn write_step(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        match self {
            Instruction::Member(member) => {
                if !first {
                    f.write_str(".")?;
                }
                if class::is_identifier(&member.name) {
                    f.write_str(&member.name)
                } else {
                    f.write_str("{")?;
                    write_quoted(f, &member.name)?;
                    f.write_str("}")
                }
            }
            Instruction::Index(index) => write!(f, "[{}]", index.key),
            Instruction::Rule(rule) => write!(f, "{rule}"),
        }
    }
}

/// Renders a chain of steps in canonical statement form.
pub(crate) fn write_steps(f: &mut fmt::Formatter<'_>, steps: &[Instruction]) -> fmt::Result {
    for (i, step) in steps.iter().enumerate() {
        step.write_step(f, i == 0)?;
    }
    Ok(())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_step(f, true)
    }
}

impl fmt::Display for MemberInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Instruction::Member(self.clone()).fmt(f)
    }
}

impl fmt::Display for IndexInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.key)
    }
}

impl fmt::Display for IndexRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if !self.lhs.is_empty() {
            write_steps(f, &self.lhs)?;
            f.write_str(" ")?;
        }
        write!(f, "{} {}]", self.operator, self.rhs)
    }
}

impl From<MemberInstruction> for Instruction {
    fn from(member: MemberInstruction) -> Self {
        Instruction::Member(member)
    }
}

impl From<IndexInstruction> for Instruction {
    fn from(index: IndexInstruction) -> Self {
        Instruction::Index(index)
    }
}

impl From<IndexRule> for Instruction {
    fn from(rule: IndexRule) -> Self {
        Instruction::Rule(rule)
    }
}
