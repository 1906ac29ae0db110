//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates `strider::Node` and `strider::Record` for structs with named
//! fields, driven by `#[record(...)]` field attributes.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
