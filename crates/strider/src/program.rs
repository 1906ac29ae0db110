//! Compiled statements.

use std::fmt;
use std::str::FromStr;

use crate::error::{SyntaxError, TraversalError};
use crate::instruction::{write_steps, Instruction};
use crate::node::Node;
use crate::parser::Parser;
use crate::value::Value;

/// An immutable, compiled selector statement.
///
/// A program holds no per-call state, so one instance can be shared (for
/// example behind an `Arc`) by any number of selectors and threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Compiles a statement.
    pub fn compile(statement: &str) -> Result<Self, SyntaxError> {
        match Parser::new(statement).parse() {
            Ok(instructions) => {
                tracing::debug!(
                    statement,
                    instructions = instructions.len(),
                    "compiled selector"
                );
                Ok(Program { instructions })
            }
            Err(err) => {
                tracing::debug!(
                    statement,
                    offset = err.offset(),
                    error = %err.message(),
                    "selector failed to compile"
                );
                Err(err)
            }
        }
    }

    /// Builds a program from instructions assembled by hand.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Applies every instruction in order, starting from `node`.
    ///
    /// An empty program returns `node` itself.
    pub fn apply<'a>(&self, node: &'a dyn Node) -> Result<Value<'a>, TraversalError> {
        self.instructions
            .iter()
            .try_fold(Value::Node(node), |current, step| step.apply(&current))
    }
}

impl FromStr for Program {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::compile(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_steps(f, &self.instructions)
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Program::from_instructions(instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn compile_counts_instructions() {
        let program = Program::compile("a.b[0]").unwrap();
        assert_eq!(program.len(), 3);
        assert!(!program.is_empty());
        assert!(program.instructions()[2].is_index());
    }

    #[test]
    fn compile_reports_offset() {
        let err = "a.".parse::<Program>().unwrap_err();
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn empty_program_is_identity() {
        let program = Program::default();
        let value = program.apply(&5i64).unwrap();
        assert_eq!(value.as_number(), Some(Number::I64(5)));
    }

    #[test]
    fn apply_threads_value() {
        let grid = vec![vec![1i64, 2], vec![3, 4]];
        let program = Program::compile("[1][0]").unwrap();
        assert_eq!(program.apply(&grid).unwrap().as_number(), Some(Number::I64(3)));

        let err = Program::compile("[2][0]").unwrap().apply(&grid).unwrap_err();
        assert!(err.is_undefined_index());
    }

    #[test]
    fn display_is_canonical() {
        let program = Program::compile(r#".a.{"b"}[ 'c' ][ x .y = 2 ]"#).unwrap();
        assert_eq!(program.to_string(), r#"a.b["c"][x.y = 2]"#);
        assert_eq!(program.to_string().parse::<Program>().unwrap(), program);
    }

    #[test]
    fn from_instructions() {
        let program = Program::from(vec![Instruction::member("a"), Instruction::index(0i64)]);
        assert_eq!(program, Program::compile("a[0]").unwrap());
    }
}
