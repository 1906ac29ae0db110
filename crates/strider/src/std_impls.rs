//! [`Node`] adapters for standard library types.
//!
//! - strings, numbers and booleans are scalars; `()` is null
//! - `Option<T>` is null when `None` and behaves as `T` otherwise
//! - smart pointers and references behave as their target
//! - `Vec`, `VecDeque` and arrays are indexable by position and iterable
//! - string-keyed `HashMap` and `BTreeMap` are indexable by key and
//!   iterable over their values

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::node::{Indexable, Iterable, Key, Node, Record};
use crate::value::{Number, Scalar};

macro_rules! number_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Node for $ty {
                fn type_name(&self) -> &'static str {
                    "number"
                }

                fn as_scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::Number(Number::from(*self)))
                }
            }
        )*
    };
}

number_node!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Node for str {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::String(self))
    }
}

impl Node for String {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::String(self))
    }
}

impl Node for bool {
    fn type_name(&self) -> &'static str {
        "bool"
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Bool(*self))
    }
}

impl Node for () {
    fn type_name(&self) -> &'static str {
        "null"
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Null)
    }
}

impl<T: Node> Node for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_name(),
            None => "null",
        }
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref()?.as_record()
    }

    fn as_indexable(&self) -> Option<&dyn Indexable> {
        self.as_ref()?.as_indexable()
    }

    fn as_iterable(&self) -> Option<&dyn Iterable> {
        self.as_ref()?.as_iterable()
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Some(inner) => inner.as_scalar(),
            None => Some(Scalar::Null),
        }
    }
}

macro_rules! delegate_node {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Node + ?Sized> Node for $ptr {
                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn as_record(&self) -> Option<&dyn Record> {
                    (**self).as_record()
                }

                fn as_indexable(&self) -> Option<&dyn Indexable> {
                    (**self).as_indexable()
                }

                fn as_iterable(&self) -> Option<&dyn Iterable> {
                    (**self).as_iterable()
                }

                fn as_scalar(&self) -> Option<Scalar<'_>> {
                    (**self).as_scalar()
                }
            }
        )*
    };
}

delegate_node!(&T, Box<T>, Rc<T>, Arc<T>);

macro_rules! sequence_node {
    ($([$($generics:tt)*] $seq:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Node for $seq {
                fn type_name(&self) -> &'static str {
                    "list"
                }

                fn as_indexable(&self) -> Option<&dyn Indexable> {
                    Some(self)
                }

                fn as_iterable(&self) -> Option<&dyn Iterable> {
                    Some(self)
                }
            }

            impl<$($generics)*> Indexable for $seq {
                fn entry(&self, key: Key<'_>) -> Option<&dyn Node> {
                    let item = self.get(key.position()?)?;
                    Some(item as &dyn Node)
                }
            }

            impl<$($generics)*> Iterable for $seq {
                fn elements(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_> {
                    Box::new(self.iter().map(|item| item as &dyn Node))
                }
            }
        )*
    };
}

sequence_node!(
    [T: Node] Vec<T>,
    [T: Node] VecDeque<T>,
    [T: Node, const N: usize] [T; N],
);

macro_rules! map_node {
    ($([$($generics:tt)*] $map:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Node for $map {
                fn type_name(&self) -> &'static str {
                    "map"
                }

                fn as_indexable(&self) -> Option<&dyn Indexable> {
                    Some(self)
                }

                fn as_iterable(&self) -> Option<&dyn Iterable> {
                    Some(self)
                }
            }

            impl<$($generics)*> Indexable for $map {
                fn entry(&self, key: Key<'_>) -> Option<&dyn Node> {
                    let key = key.map_key();
                    let item = self.get(&*key)?;
                    Some(item as &dyn Node)
                }
            }

            impl<$($generics)*> Iterable for $map {
                fn elements(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_> {
                    Box::new(self.values().map(|item| item as &dyn Node))
                }
            }
        )*
    };
}

map_node!(
    [T: Node, S: BuildHasher] HashMap<String, T, S>,
    [T: Node] BTreeMap<String, T>,
);
