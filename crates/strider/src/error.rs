//! Error types for the strider crate.
//!
//! Errors come in two disjoint families: [`SyntaxError`] is raised while a
//! statement is compiled, [`TraversalError`] while a compiled program walks
//! a graph. [`Error`] wraps both for callers that do the two in one step.

use thiserror::Error;

use crate::literal::Literal;

/// A statement could not be parsed.
///
/// The offset counts code points (not bytes) from the start of the
/// statement and marks where the cursor stood when the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct SyntaxError {
    message: String,
    offset: usize,
}

impl SyntaxError {
    /// Creates a syntax error at the given code-point offset.
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        SyntaxError {
            message: message.into(),
            offset,
        }
    }

    /// Human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Code-point offset at which parsing failed.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A compiled program could not follow a step through the graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraversalError {
    /// The current node lacks the capability the instruction needs.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The record has no field with the requested name.
    #[error("undefined field: {node}::{name}")]
    UndefinedField { node: &'static str, name: String },

    /// The container has no entry under the requested key.
    #[error("undefined index: {key}")]
    UndefinedIndex { key: Literal },
}

impl TraversalError {
    pub(crate) fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        TraversalError::TypeMismatch { expected, actual }
    }

    /// Returns `true` for [`TraversalError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, TraversalError::TypeMismatch { .. })
    }

    /// Returns `true` for [`TraversalError::UndefinedField`].
    pub fn is_undefined_field(&self) -> bool {
        matches!(self, TraversalError::UndefinedField { .. })
    }

    /// Returns `true` for [`TraversalError::UndefinedIndex`].
    pub fn is_undefined_index(&self) -> bool {
        matches!(self, TraversalError::UndefinedIndex { .. })
    }
}

/// Either kind of failure, for one-shot compile-and-select calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

/// Result type for strider operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn syntax_error_display_includes_offset() {
        let err = SyntaxError::new("expected member name, found '\"bar\"'", 0);
        assert_eq!(err.offset(), 0);
        assert_eq!(
            err.to_string(),
            "expected member name, found '\"bar\"' at offset 0"
        );
    }

    #[test]
    fn traversal_error_messages() {
        let err = TraversalError::type_mismatch("record", "list");
        assert_eq!(err.to_string(), "type mismatch: expected record, got list");
        assert!(err.is_type_mismatch());

        let err = TraversalError::UndefinedField {
            node: "Task",
            name: "owner".to_string(),
        };
        assert_eq!(err.to_string(), "undefined field: Task::owner");
        assert!(err.is_undefined_field());

        let err = TraversalError::UndefinedIndex {
            key: Literal::Number(Number::I64(3)),
        };
        assert_eq!(err.to_string(), "undefined index: 3");
        assert!(err.is_undefined_index());
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: Error = SyntaxError::new("expected \"]\", found end of input", 1).into();
        assert_eq!(
            err.to_string(),
            "expected \"]\", found end of input at offset 1"
        );
        assert!(matches!(err, Error::Syntax(_)));
    }
}
