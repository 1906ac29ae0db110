//! The public facade: a compiled program plus a failure policy.
//!
//! A [`Selector`] folds its program over a graph and remembers the outcome
//! of the most recent call. In lenient mode (the default) a failed
//! traversal returns `Ok(None)` and is kept for inspection through
//! [`Selector::error`]; in strict mode it is also returned as `Err`.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use strider::Selector;
//!
//! let doc = json!({ "items": [{ "id": 1 }, { "id": 2 }] });
//!
//! let mut selector = Selector::new("items[id = 2][0].id").unwrap();
//! let value = selector.select(&doc).unwrap().unwrap();
//! assert_eq!(value.as_number(), Some(2i64.into()));
//!
//! let mut missing = Selector::new("items[5]").unwrap();
//! assert!(missing.select(&doc).unwrap().is_none());
//! assert!(missing.failed());
//! ```

use std::str::FromStr;
use std::sync::Arc;

use crate::error::{SyntaxError, TraversalError};
use crate::node::Node;
use crate::program::Program;
use crate::value::Value;

/// Options applied when a selector is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorOptions {
    /// Return traversal failures as `Err` instead of `Ok(None)`.
    pub strict: bool,
}

impl SelectorOptions {
    pub fn new() -> Self {
        SelectorOptions::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// A compiled statement with its own error slot.
///
/// The error slot is per-instance scratch state: give each thread its own
/// selector, built with [`Selector::from_program`] over a shared
/// [`Program`] when compiling once matters.
#[derive(Debug, Clone)]
pub struct Selector {
    program: Arc<Program>,
    strict: bool,
    last_error: Option<TraversalError>,
}

impl Selector {
    /// Compiles `statement` into a lenient selector.
    pub fn new(statement: &str) -> Result<Self, SyntaxError> {
        Ok(Selector::from_program(Arc::new(Program::compile(statement)?)))
    }

    /// Compiles `statement` and applies `options`.
    pub fn with_options(statement: &str, options: SelectorOptions) -> Result<Self, SyntaxError> {
        Ok(Selector::new(statement)?.strict(options.strict))
    }

    /// Wraps an already compiled, possibly shared, program.
    pub fn from_program(program: Arc<Program>) -> Self {
        Selector {
            program,
            strict: false,
            last_error: None,
        }
    }

    /// Sets the failure policy, builder style.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn program(&self) -> &Arc<Program> {
        &self.program
    }

    /// Applies the program to `node`.
    ///
    /// The error slot is cleared first. On failure the error is recorded;
    /// strict selectors return it, lenient ones return `Ok(None)`.
    pub fn select<'a>(
        &mut self,
        node: &'a dyn Node,
    ) -> Result<Option<Value<'a>>, TraversalError> {
        self.last_error = None;

        match self.program.apply(node) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::trace!(
                    program = %self.program,
                    strict = self.strict,
                    error = %err,
                    "selection failed"
                );
                self.last_error = Some(err.clone());
                if self.strict {
                    Err(err)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Did the most recent [`select`](Self::select) record a failure?
    pub fn failed(&self) -> bool {
        self.last_error.is_some()
    }

    /// The failure recorded by the most recent [`select`](Self::select).
    pub fn error(&self) -> Option<&TraversalError> {
        self.last_error.as_ref()
    }
}

impl FromStr for Selector {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::new(s)
    }
}

impl From<Program> for Selector {
    fn from(program: Program) -> Self {
        Selector::from_program(Arc::new(program))
    }
}
