//! Sort keys and the type-aware comparator.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for field-based
//! ordering, and the comparison functions used during evaluation.
//!
//! Missing values always order after defined values, for both directions.
//! Toggling a column between ascending and descending must not make rows
//! without data jump between the top and the bottom of the table, so
//! direction is applied only to comparisons between two defined values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering between two defined values.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the wire name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Dir::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Dir::Desc)
        } else {
            Err(QueryError::InvalidDirection(s.to_string()))
        }
    }
}

/// A single sort key: a field name and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates a sort key with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            field: field.into(),
            dir,
        }
    }

    /// Creates an ascending sort key.
    pub fn asc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Asc)
    }

    /// Creates a descending sort key.
    pub fn desc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Desc)
    }

    /// Compares two field values under this key.
    ///
    /// Missing values sink to the bottom regardless of direction; the
    /// direction only reverses comparisons between two defined values.
    /// Incomparable pairs (mismatched kinds, NaN) compare as equal so a
    /// stable sort preserves their input order.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        match (a.is_missing(), b.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .dir
                .apply(compare_defined(a, b).unwrap_or(Ordering::Equal)),
        }
    }
}

/// Compares two defined values of the same kind.
///
/// Text compares case-sensitively byte-wise (deliberately not
/// locale-aware, so ordering is identical across environments), numbers
/// numerically, and dates by epoch millisecond. Returns `None` when the
/// kinds differ or a NaN is involved.
pub fn compare_defined(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Compares two records using a list of sort keys.
///
/// The first key is the primary ordering, later keys break ties. With an
/// empty key list everything compares equal, which leaves a stable sort
/// as a no-op.
pub fn compare_by_keys<T, F>(a: &T, b: &T, keys: &[SortKey], accessor: &F) -> Ordering
where
    for<'v> F: Fn(&'v T, &str) -> Value<'v>,
{
    for key in keys {
        let ordering = key.compare(&accessor(a, &key.field), &accessor(b, &key.field));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
