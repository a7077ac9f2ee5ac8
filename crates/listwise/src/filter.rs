//! Filter predicates combined with AND semantics.
//!
//! A [`Filter`] names one field and one [`Test`]. Evaluation keeps a
//! record only if every filter passes; an empty filter list passes
//! everything. Absent fields follow a fixed policy: they fail `equals`,
//! fail `present`, and pass `absent`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::value::{Date, Number, Value};

/// A single filter predicate: a field name and a test on its value.
///
/// # Example
///
/// ```
/// use listwise::{Filter, Value};
///
/// let by_city = Filter::equals("city", "Lima");
/// assert!(by_city.passes(&Value::Text("lima")));
/// assert!(!by_city.passes(&Value::Missing));
///
/// let documented = Filter::present("description");
/// assert!(!documented.passes(&Value::Text("   ")));
/// ```
#[derive(Debug, Clone)]
pub struct Filter {
    /// The field this filter reads.
    pub field: String,
    /// The test applied to the field's value.
    pub test: Test,
}

impl Filter {
    /// Creates a filter from a field name and a test.
    pub fn new(field: impl Into<String>, test: Test) -> Self {
        Filter {
            field: field.into(),
            test,
        }
    }

    /// Value equality, case-insensitive for text.
    pub fn equals(field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Filter::new(field, Test::Equals(value.into()))
    }

    /// Passes when the field has a non-empty value.
    pub fn present(field: impl Into<String>) -> Self {
        Filter::new(field, Test::Present(true))
    }

    /// Passes when the field is missing or, for text, blank.
    pub fn absent(field: impl Into<String>) -> Self {
        Filter::new(field, Test::Present(false))
    }

    /// An arbitrary caller-supplied test on the field's value.
    ///
    /// The test receives [`Value::Missing`] for absent fields and must
    /// not panic.
    pub fn custom<F>(field: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value<'_>) -> bool + Send + Sync + 'static,
    {
        Filter::new(field, Test::Custom(Arc::new(test)))
    }

    /// Applies this filter's test to a field value.
    pub fn passes(&self, value: &Value<'_>) -> bool {
        self.test.passes(value)
    }
}

/// The test half of a filter.
#[derive(Clone)]
pub enum Test {
    /// Strict equality after case normalization for text.
    Equals(Scalar),
    /// Presence check: `Present(true)` requires a non-empty value,
    /// `Present(false)` is its negation.
    Present(bool),
    /// Caller-supplied boolean test.
    Custom(Arc<dyn Fn(&Value<'_>) -> bool + Send + Sync>),
}

impl Test {
    /// Evaluates this test against a field value.
    pub fn passes(&self, value: &Value<'_>) -> bool {
        match self {
            Test::Equals(expected) => expected.matches(value),
            Test::Present(wanted) => is_present(value) == *wanted,
            Test::Custom(test) => test(value),
        }
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Test::Equals(scalar) => f.debug_tuple("Equals").field(scalar).finish(),
            Test::Present(wanted) => f.debug_tuple("Present").field(wanted).finish(),
            Test::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A value is present when it is defined and, for text, non-blank.
fn is_present(value: &Value<'_>) -> bool {
    match value {
        Value::Text(s) => !s.trim().is_empty(),
        Value::Number(_) | Value::Date(_) => true,
        Value::Missing => false,
    }
}

/// Owned comparison value for `equals` filters.
///
/// Unlike [`Value`], which borrows from the record, a `Scalar` owns its
/// data so filters can be stored on the query state.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// Date value.
    Date(Date),
}

impl Scalar {
    /// Tests equality against a field value.
    ///
    /// Text compares case-insensitively, numbers by numeric value across
    /// variants, dates by epoch millisecond. A missing field or a kind
    /// mismatch never matches.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (Scalar::Text(expected), Value::Text(actual)) => {
                expected.to_lowercase() == actual.to_lowercase()
            }
            (Scalar::Number(expected), Value::Number(actual)) => {
                actual.compare(*expected) == Some(Ordering::Equal)
            }
            (Scalar::Date(expected), Value::Date(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "\"{s}\""),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

impl From<Date> for Scalar {
    fn from(d: Date) -> Self {
        Scalar::Date(d)
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for Scalar {
            fn from(n: $ty) -> Self {
                Scalar::Number(Number::from(n))
            }
        })+
    };
}

scalar_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Tests a record against every filter; all must pass.
pub(crate) fn passes_all<T, F>(record: &T, filters: &[Filter], accessor: &F) -> bool
where
    for<'v> F: Fn(&'v T, &str) -> Value<'v>,
{
    filters
        .iter()
        .all(|filter| filter.passes(&accessor(record, &filter.field)))
}
