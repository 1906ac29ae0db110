//! Capabilities a host graph exposes to the interpreter.
//!
//! The interpreter never assumes a concrete container type. Each node
//! advertises what it can do through [`Node`]:
//!
//! - **field access** ([`Record`]) for member steps such as `.owner`,
//! - **indexed access** ([`Indexable`]) for index steps such as `[0]` or `["id"]`,
//! - **iteration** ([`Iterable`]) for rule steps such as `[kind = "leaf"]`,
//! - a **scalar** view ([`Scalar`]) for the comparison inside a rule.
//!
//! A node may offer any combination. Steps fail with a type mismatch when
//! the capability they need is absent.
//!
//! Adapters are provided for the standard library types, for
//! `serde_json::Value` (feature `json`) and `serde_yaml::Value` (feature
//! `yaml`). Host structs usually derive theirs with `#[derive(Record)]`.
//!
//! # Manual Implementation
//!
//! ```
//! use strider::{Node, Record, Selector};
//!
//! struct Task {
//!     name: String,
//!     priority: u8,
//! }
//!
//! impl Node for Task {
//!     fn type_name(&self) -> &'static str {
//!         "Task"
//!     }
//!
//!     fn as_record(&self) -> Option<&dyn Record> {
//!         Some(self)
//!     }
//! }
//!
//! impl Record for Task {
//!     fn field(&self, name: &str) -> Option<&dyn Node> {
//!         match name {
//!             "name" => Some(&self.name),
//!             "priority" => Some(&self.priority),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let task = Task { name: "Write docs".into(), priority: 3 };
//! let mut selector = Selector::new("name").unwrap();
//! let value = selector.select(&task).unwrap().unwrap();
//! assert_eq!(value.as_str(), Some("Write docs"));
//! ```

use std::borrow::Cow;

use crate::value::Scalar;

/// A node of a host graph.
///
/// Every method has a default, so an implementation only overrides the
/// capabilities the node actually has.
pub trait Node {
    /// Name of the node's kind, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Field access, if the node is record-like.
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// Keyed or positional access, if the node is a container.
    fn as_indexable(&self) -> Option<&dyn Indexable> {
        None
    }

    /// Child iteration, if the node can be filtered by rules.
    fn as_iterable(&self) -> Option<&dyn Iterable> {
        None
    }

    /// Leaf value, if the node is a scalar.
    fn as_scalar(&self) -> Option<Scalar<'_>> {
        None
    }
}

/// Named field access.
///
/// Returning `None` means the field does not exist. Implementations may
/// resolve names dynamically, e.g. from a backing map.
pub trait Record {
    fn field(&self, name: &str) -> Option<&dyn Node>;
}

/// Access by integer position or string key.
pub trait Indexable {
    fn entry(&self, key: Key<'_>) -> Option<&dyn Node>;
}

/// Iteration over child values, in container order.
pub trait Iterable {
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_>;
}

/// Key of an index step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Int(i64),
    Str(&'a str),
}

impl<'a> Key<'a> {
    /// Position in a sequence; only non-negative integers qualify.
    pub fn position(self) -> Option<usize> {
        match self {
            Key::Int(n) => usize::try_from(n).ok(),
            Key::Str(_) => None,
        }
    }

    /// Key in a string-keyed map; integers are looked up by their decimal text.
    pub fn map_key(self) -> Cow<'a, str> {
        match self {
            Key::Int(n) => Cow::Owned(n.to_string()),
            Key::Str(s) => Cow::Borrowed(s),
        }
    }
}
