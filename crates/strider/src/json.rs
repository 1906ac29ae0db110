//! [`Node`] adapter for `serde_json::Value`.
//!
//! Objects are records, indexable by key and iterable over their values.
//! Arrays are indexable by position and iterable. Everything else is a
//! scalar.

use serde_json::Value as Json;

use crate::node::{Indexable, Iterable, Key, Node, Record};
use crate::value::{Number, Scalar};

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Node for Json {
    fn type_name(&self) -> &'static str {
        match self {
            Json::Null => "null",
            Json::Bool(_) => "bool",
            Json::Number(_) => "number",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
    }

    fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Json::Object(_) => Some(self),
            _ => None,
        }
    }

    fn as_indexable(&self) -> Option<&dyn Indexable> {
        match self {
            Json::Array(_) | Json::Object(_) => Some(self),
            _ => None,
        }
    }

    fn as_iterable(&self) -> Option<&dyn Iterable> {
        match self {
            Json::Array(_) | Json::Object(_) => Some(self),
            _ => None,
        }
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Json::Null => Some(Scalar::Null),
            Json::Bool(b) => Some(Scalar::Bool(*b)),
            Json::Number(n) => Some(Scalar::Number(json_number(n))),
            Json::String(s) => Some(Scalar::String(s)),
            Json::Array(_) | Json::Object(_) => None,
        }
    }
}

impl Record for Json {
    fn field(&self, name: &str) -> Option<&dyn Node> {
        let value = self.as_object()?.get(name)?;
        Some(value as &dyn Node)
    }
}

impl Indexable for Json {
    fn entry(&self, key: Key<'_>) -> Option<&dyn Node> {
        let value = match self {
            Json::Array(items) => items.get(key.position()?)?,
            Json::Object(map) => map.get(&*key.map_key())?,
            _ => return None,
        };
        Some(value as &dyn Node)
    }
}

impl Iterable for Json {
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_> {
        match self {
            Json::Array(items) => Box::new(items.iter().map(|v| v as &dyn Node)),
            Json::Object(map) => Box::new(map.values().map(|v| v as &dyn Node)),
            _ => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(json!(null).as_scalar(), Some(Scalar::Null));
        assert_eq!(json!(true).as_scalar(), Some(Scalar::Bool(true)));
        assert_eq!(json!(-3).as_scalar(), Some(Scalar::Number(Number::I64(-3))));
        assert_eq!(
            json!(u64::MAX).as_scalar(),
            Some(Scalar::Number(Number::U64(u64::MAX)))
        );
        assert_eq!(json!(0.5).as_scalar(), Some(Scalar::Number(Number::F64(0.5))));
        assert_eq!(json!("s").as_scalar(), Some(Scalar::String("s")));
        assert!(json!([]).as_scalar().is_none());
    }

    #[test]
    fn objects_are_records_and_maps() {
        let doc = json!({ "a": 1, "0": "zero" });
        assert_eq!(doc.type_name(), "object");
        assert!(doc.as_record().unwrap().field("a").is_some());
        assert!(doc.as_record().unwrap().field("b").is_none());

        let index = doc.as_indexable().unwrap();
        assert!(index.entry(Key::Str("a")).is_some());
        assert_eq!(
            index.entry(Key::Int(0)).and_then(|n| n.as_scalar()),
            Some(Scalar::String("zero"))
        );
        assert_eq!(doc.as_iterable().unwrap().elements().count(), 2);
    }

    #[test]
    fn arrays_are_positional() {
        let doc = json!(["x", "y"]);
        assert!(doc.as_record().is_none());
        let index = doc.as_indexable().unwrap();
        assert_eq!(
            index.entry(Key::Int(1)).and_then(|n| n.as_scalar()),
            Some(Scalar::String("y"))
        );
        assert!(index.entry(Key::Str("1")).is_none());
        assert!(index.entry(Key::Int(-1)).is_none());
    }

    #[test]
    fn scalars_have_no_containers() {
        let doc = json!("text");
        assert!(doc.as_record().is_none());
        assert!(doc.as_indexable().is_none());
        assert!(doc.as_iterable().is_none());
    }
}
