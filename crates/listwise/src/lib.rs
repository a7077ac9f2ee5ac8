//! Listwise - Query engine for table views over in-memory collections.
//!
//! Listwise keeps the state behind a searchable, filterable, sortable,
//! paginated list in one value and evaluates it in one pass. It
//! supports:
//!
//! - Case-insensitive substring search across chosen fields
//! - Filter predicates: equality, presence, and custom tests
//! - Stable multi-field sorting with missing values always last
//! - Clamped 1-based pagination that never errors
//! - A derive macro mapping struct fields to queryable values
//!
//! # Quick Start
//!
//! ```rust
//! use listwise::{ListQuery, Record};
//!
//! // Annotate the fields a list view exposes
//! #[derive(Record)]
//! struct Site {
//!     #[record(text)]
//!     name: String,
//!     #[record(text)]
//!     city: Option<String>,
//!     #[record(number)]
//!     devices: u32,
//! }
//!
//! let sites = vec![
//!     Site { name: "North depot".into(), city: Some("Bogotá".into()), devices: 4 },
//!     Site { name: "South depot".into(), city: Some("Lima".into()), devices: 7 },
//!     Site { name: "Lab bench".into(), city: None, devices: 1 },
//! ];
//!
//! // Describe the view, then evaluate it against the data
//! let query = ListQuery::new()
//!     .search("depot")
//!     .search_in([Site::NAME, Site::CITY])
//!     .filter_present(Site::CITY)
//!     .sort_desc(Site::DEVICES)
//!     .page_size(10);
//!
//! let page = query.evaluate(&sites, Site::accessor);
//! assert_eq!(page.total, 2);
//! assert_eq!(page.items[0].name, "South depot");
//! assert_eq!(page.summary(), "1-2 of 2 results");
//! ```
//!
//! # Pipeline
//!
//! Evaluation always runs the same four stages over the full record
//! slice, so a query can be replayed whenever the data changes:
//!
//! ```text
//! records -> search -> filters -> sort -> paginate -> ListPage
//! ```
//!
//! - **Search**: case-insensitive substring test; a record matches when
//!   any one named field contains the term
//! - **Filters**: every predicate must pass
//! - **Sort**: stable multi-key ordering; missing values sort last in
//!   both directions
//! - **Paginate**: the page cursor clamps into `1..=total_pages`
//!
//! Nothing in the pipeline fails or panics: unknown fields read as
//! [`Value::Missing`], out-of-range cursors clamp, and the input slice
//! is never mutated.
//!
//! # Field Kinds
//!
//! | Kind | Rust sources | Ordering |
//! |------|--------------|----------|
//! | Text | `String`, `&str` | case-sensitive byte order |
//! | Number | all integer and float widths | numeric across widths |
//! | Date | [`Date`], `i64` millis, chrono types | epoch milliseconds |
//!
//! `Option<T>` of any of these reads as [`Value::Missing`] when `None`.

mod error;
mod filter;
mod page;
mod query;
mod search;
mod sort;
mod traits;
mod value;

// Re-export public API
pub use error::{QueryError, Result};
pub use filter::{Filter, Scalar, Test};
pub use page::{ListPage, PagePlan, DEFAULT_PAGE_SIZE};
pub use query::ListQuery;
pub use search::search_matches;
pub use sort::{compare_by_keys, compare_defined, Dir, SortKey};
pub use traits::{AsDate, Record};
pub use value::{Date, Number, Value};

/// Derive macro for [`Record`], enabled by the `derive` feature.
///
/// See the [crate docs](crate) for the attribute syntax.
#[cfg(feature = "derive")]
pub use listwise_macros::Record;
