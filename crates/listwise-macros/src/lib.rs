//! Proc macros for Listwise.
//!
//! This crate provides the [`Record`] derive macro, which maps struct
//! fields to the query engine's value model. It is normally consumed
//! through the `listwise` crate's default `derive` feature rather than
//! as a direct dependency.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for queryable structs.
///
/// The generated implementation gives every annotated field a by-name
/// lookup, so the struct plugs into `ListQuery` via `Self::accessor`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `text` | Text field, searched and compared as a string |
/// | `number` | Numeric field (any integer or float width) |
/// | `date` | Date field; the field type must implement `AsDate` |
/// | `skip` | Exclude this field from queries |
/// | `rename = "..."` | Use a custom name for queries |
///
/// Fields without a `#[record(...)]` attribute stay out of the query
/// surface. An `Option<T>` field of any kind reads as `Value::Missing`
/// when `None`.
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Field name constants (e.g. `Site::NAME`, `Site::LAST_SEEN`)
/// 2. A `FIELD_NAMES` constant listing every queryable field
/// 3. An implementation of `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use listwise::{ListQuery, Record};
///
/// #[derive(Record)]
/// struct Site {
///     #[record(text)]
///     name: String,
///
///     #[record(text)]
///     city: Option<String>,
///
///     #[record(number)]
///     devices: u32,
///
///     #[record(date, rename = "seen")]
///     last_seen: Option<i64>,
///
///     #[record(skip)]
///     internal_id: u64,
/// }
///
/// let query = ListQuery::new()
///     .search_in([Site::NAME, Site::CITY])
///     .sort_desc(Site::SEEN);
///
/// let page = query.evaluate(&sites, Site::accessor);
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
