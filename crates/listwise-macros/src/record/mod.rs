//! Implementation of the `#[derive(Record)]` macro.
//!
//! Derive macro support for the Listwise query engine: generates field
//! name constants and a `Record::field_value` implementation from
//! struct field annotations.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
