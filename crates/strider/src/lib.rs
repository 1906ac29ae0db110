//! Strider - a small selector language for object graphs.
//!
//! A statement such as `a.b[0][child = "x"].c` is compiled once into a
//! sequence of instructions, then applied to any number of graphs to
//! extract or filter values. Graphs are made of records (named fields),
//! indexable containers (lists and keyed maps) and scalar leaves; the
//! interpreter reaches them only through the capability traits [`Node`],
//! [`Record`], [`Indexable`] and [`Iterable`].
//!
//! # Quick Start
//!
//! ```rust
//! use strider::{Record, Selector};
//!
//! #[derive(Record)]
//! struct Part {
//!     kind: String,
//!     weight: u32,
//! }
//!
//! #[derive(Record)]
//! struct Assembly {
//!     name: String,
//!     parts: Vec<Part>,
//! }
//!
//! let assembly = Assembly {
//!     name: "frame".into(),
//!     parts: vec![
//!         Part { kind: "bolt".into(), weight: 2 },
//!         Part { kind: "beam".into(), weight: 40 },
//!         Part { kind: "bolt".into(), weight: 3 },
//!     ],
//! };
//!
//! let mut selector = Selector::new(r#"parts[kind = "bolt"][1].weight"#).unwrap();
//! let weight = selector.select(&assembly).unwrap().unwrap();
//! assert_eq!(weight.as_number(), Some(3u32.into()));
//! ```
//!
//! # Statements
//!
//! | Step | Meaning |
//! |------|---------|
//! | `name`, `.name` | field of a record |
//! | `{"any name"}` | field whose name is not a bare identifier |
//! | `[0]`, `["key"]` | entry of a list or map |
//! | `[path = value]` | elements whose `path` equals `value` |
//!
//! A rule keeps the matching elements in container order. The result is a
//! match set that can be indexed by position or filtered again, so
//! `items[kind = "leaf"][0].name` reads the name of the first leaf.
//!
//! # Errors
//!
//! Compiling fails with a [`SyntaxError`] carrying the code-point offset of
//! the problem. Traversal fails with a [`TraversalError`]; a [`Selector`]
//! either returns it (strict) or records it and returns `Ok(None)`
//! (lenient, the default).
//!
//! # Features
//!
//! - `derive` (default): `#[derive(Record)]` for host structs
//! - `json` (default): [`Node`] for `serde_json::Value`
//! - `yaml` (default): [`Node`] for `serde_yaml::Value`

pub mod class;
mod cursor;
mod error;
mod instruction;
mod literal;
mod node;
mod op;
mod parser;
mod program;
mod selector;
mod std_impls;
mod value;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "yaml")]
mod yaml;

// Re-export public API
pub use cursor::Cursor;
pub use error::{Error, Result, SyntaxError, TraversalError};
pub use instruction::{IndexInstruction, IndexRule, Instruction, MemberInstruction};
pub use literal::Literal;
pub use node::{Indexable, Iterable, Key, Node, Record};
pub use op::Operator;
pub use parser::{parse, Parser};
pub use program::Program;
pub use selector::{Selector, SelectorOptions};
pub use value::{Number, Scalar, Value};

#[cfg(feature = "derive")]
pub use strider_macros::Record;

/// Compiles `statement` and applies it to `node` in one step.
///
/// Any traversal failure is returned, as in a strict [`Selector`].
///
/// ```
/// let doc = serde_json::json!({ "a": { "b": [10, 20] } });
/// let value = strider::select("a.b[1]", &doc).unwrap();
/// assert_eq!(value.as_number(), Some(20i64.into()));
/// ```
pub fn select<'a>(statement: &str, node: &'a dyn Node) -> Result<Value<'a>> {
    let program = Program::compile(statement)?;
    Ok(program.apply(node)?)
}
