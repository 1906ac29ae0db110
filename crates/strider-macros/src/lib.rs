//! Proc macros for Strider.
//!
//! - [`Record`] - expose struct fields to selector statements
//!
//! The generated code refers to the `strider` crate by its absolute path,
//! so use the derive through `strider::Record` rather than depending on
//! this crate directly.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `strider::Node` and `strider::Record` for a struct.
///
/// Every named field becomes selectable by its name. Field types must
/// implement `strider::Node`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this field from selection |
/// | `rename = "..."` | Select the field under a custom name |
/// | `dynamic` | Look up names no other field matches in this field (must implement `strider::Indexable`) |
///
/// # Example
///
/// ```ignore
/// use std::collections::HashMap;
/// use strider::{Record, Selector};
///
/// #[derive(Record)]
/// struct Host {
///     #[record(rename = "hostname")]
///     name: String,
///
///     #[record(skip)]
///     token: String,
///
///     #[record(dynamic)]
///     labels: HashMap<String, String>,
/// }
///
/// let host = Host {
///     name: "db-1".into(),
///     token: "secret".into(),
///     labels: HashMap::from([("zone".to_string(), "eu".to_string())]),
/// };
///
/// let mut selector = Selector::new("zone").unwrap();
/// let zone = selector.select(&host).unwrap().unwrap();
/// assert_eq!(zone.as_str(), Some("eu"));
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
