//! Runtime value types for record fields.
//!
//! A record field is viewed at query time as a [`Value`]: text, a number,
//! a date, or [`Value::Missing`] when the field is absent or empty. The
//! accessor function given to the evaluation methods returns this type.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The value of one record field, borrowed from the record.
///
/// Records expose their fields through an accessor returning this enum.
/// The variants mirror the value kinds a table view works with: free text,
/// numeric columns, date columns, and absent data.
///
/// # Example
///
/// ```
/// use listwise::{Number, Value};
///
/// struct Device {
///     name: String,
///     city: Option<String>,
///     events: u32,
/// }
///
/// fn accessor<'a>(device: &'a Device, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(&device.name),
///         "city" => match &device.city {
///             Some(city) => Value::Text(city),
///             None => Value::Missing,
///         },
///         "events" => Value::Number(Number::U64(device.events as u64)),
///         _ => Value::Missing,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Date value (epoch milliseconds).
    Date(Date),
    /// Field absent, unknown, or empty.
    Missing,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `Missing` value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Date` value.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the date value, if present.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Renders the value as search text.
    ///
    /// Text is borrowed verbatim, numbers use their decimal rendering,
    /// dates render as RFC 3339 UTC, and `Missing` becomes the empty
    /// string so it never matches a non-empty search term.
    pub fn search_text(&self) -> Cow<'a, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Date(d) => Cow::Owned(d.to_string()),
            Value::Missing => Cow::Borrowed(""),
        }
    }
}

/// Numeric field value.
///
/// Stored in one of three variants so integer precision survives until a
/// comparison actually needs mixing:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for mixed-variant comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, promoting mixed variants through f64.
    ///
    /// Returns `None` only when NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident: $($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for Number {
            fn from(n: $ty) -> Self {
                Number::$variant(n as _)
            }
        })+
    };
}

number_from!(I64: i8, i16, i32, i64, isize);
number_from!(U64: u8, u16, u32, u64, usize);
number_from!(F64: f32, f64);

/// Date field value as milliseconds since the Unix epoch.
///
/// A deliberately thin representation: ordering and equality are integer
/// comparisons, and callers convert from their preferred datetime type.
/// Serializes transparently as the millisecond integer, matching the JSON
/// payloads table data usually arrives in.
///
/// # Example
///
/// ```
/// use listwise::Date;
///
/// let d = Date::from_secs(1_706_500_000);
/// assert!(Date::from_millis(0) < d);
/// assert_eq!(d.as_millis(), 1_706_500_000_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Date(pub i64);

impl Date {
    /// Creates a date from milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Date(millis)
    }

    /// Creates a date from seconds since the Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Date(secs * 1000)
    }

    /// Returns the date as milliseconds since the Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the date as seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }

    /// Converts to a UTC datetime, if within chrono's representable range.
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for Date {
    /// RFC 3339 UTC, falling back to the raw millisecond count for
    /// out-of-range values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<i64> for Date {
    fn from(millis: i64) -> Self {
        Date(millis)
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(dt: DateTime<Utc>) -> Self {
        Date(dt.timestamp_millis())
    }
}

impl From<chrono::NaiveDate> for Date {
    fn from(d: chrono::NaiveDate) -> Self {
        Date(d.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
    }
}

impl From<chrono::NaiveDateTime> for Date {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        Date(dt.and_utc().timestamp_millis())
    }
}
