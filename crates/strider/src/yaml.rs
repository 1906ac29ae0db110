//! [`Node`] adapter for `serde_yaml::Value`.
//!
//! Mappings are records, indexable by key and iterable over their values.
//! Sequences are indexable by position and iterable. Tagged values behave
//! as the value they wrap.

use serde_yaml::Value as Yaml;

use crate::node::{Indexable, Iterable, Key, Node, Record};
use crate::value::{Number, Scalar};

fn yaml_number(n: &serde_yaml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Strips any number of tags.
fn untagged(value: &Yaml) -> &Yaml {
    match value {
        Yaml::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

fn lookup<'m>(map: &'m serde_yaml::Mapping, key: Key<'_>) -> Option<&'m Yaml> {
    match key {
        Key::Str(name) => map.get(Yaml::String(name.to_string())),
        // integer keys may be written either as numbers or as strings
        Key::Int(n) => map
            .get(Yaml::Number(n.into()))
            .or_else(|| map.get(Yaml::String(n.to_string()))),
    }
}

impl Node for Yaml {
    fn type_name(&self) -> &'static str {
        match untagged(self) {
            Yaml::Null => "null",
            Yaml::Bool(_) => "bool",
            Yaml::Number(_) => "number",
            Yaml::String(_) => "string",
            Yaml::Sequence(_) => "sequence",
            Yaml::Mapping(_) => "mapping",
            Yaml::Tagged(_) => "tagged",
        }
    }

    fn as_record(&self) -> Option<&dyn Record> {
        match untagged(self) {
            inner @ Yaml::Mapping(_) => Some(inner),
            _ => None,
        }
    }

    fn as_indexable(&self) -> Option<&dyn Indexable> {
        match untagged(self) {
            inner @ (Yaml::Sequence(_) | Yaml::Mapping(_)) => Some(inner),
            _ => None,
        }
    }

    fn as_iterable(&self) -> Option<&dyn Iterable> {
        match untagged(self) {
            inner @ (Yaml::Sequence(_) | Yaml::Mapping(_)) => Some(inner),
            _ => None,
        }
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match untagged(self) {
            Yaml::Null => Some(Scalar::Null),
            Yaml::Bool(b) => Some(Scalar::Bool(*b)),
            Yaml::Number(n) => Some(Scalar::Number(yaml_number(n))),
            Yaml::String(s) => Some(Scalar::String(s)),
            _ => None,
        }
    }
}

impl Record for Yaml {
    fn field(&self, name: &str) -> Option<&dyn Node> {
        match untagged(self) {
            Yaml::Mapping(map) => lookup(map, Key::Str(name)).map(|v| v as &dyn Node),
            _ => None,
        }
    }
}

impl Indexable for Yaml {
    fn entry(&self, key: Key<'_>) -> Option<&dyn Node> {
        let value = match untagged(self) {
            Yaml::Sequence(items) => items.get(key.position()?)?,
            Yaml::Mapping(map) => lookup(map, key)?,
            _ => return None,
        };
        Some(value as &dyn Node)
    }
}

impl Iterable for Yaml {
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_> {
        match untagged(self) {
            Yaml::Sequence(items) => Box::new(items.iter().map(|v| v as &dyn Node)),
            Yaml::Mapping(map) => Box::new(map.values().map(|v| v as &dyn Node)),
            _ => Box::new(std::iter::empty()),
        }
    }
}
