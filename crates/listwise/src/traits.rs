//! Traits connecting user record types to the query engine.
//!
//! Implement [`Record`] (or derive it) to give a struct a by-name field
//! lookup; [`Record::accessor`] adapts that lookup into the accessor
//! function every query operation takes. [`AsDate`] converts common
//! timestamp types into the engine's [`Date`] representation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::value::{Date, Value};

/// By-name field access for a record type.
///
/// Returning [`Value::Missing`] for unknown fields keeps every query
/// total: unknown search fields match nothing, unknown filter fields
/// follow the missing-value policy, and unknown sort fields leave the
/// order untouched.
///
/// # Example
///
/// ```
/// use listwise::{Record, Value};
///
/// struct Site {
///     name: String,
///     devices: u32,
/// }
///
/// impl Record for Site {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(&self.name),
///             "devices" => Value::Number(self.devices.into()),
///             _ => Value::Missing,
///         }
///     }
/// }
///
/// let site = Site { name: "North depot".into(), devices: 4 };
/// assert_eq!(site.field_value("devices"), Value::Number(4u32.into()));
/// assert!(site.field_value("ghost").is_missing());
/// ```
pub trait Record {
    /// Looks up a field by name, `Value::Missing` when absent.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Plain-function form of [`field_value`](Record::field_value),
    /// shaped to pass directly to query operations:
    ///
    /// ```
    /// # use listwise::{ListQuery, Record, Value};
    /// # struct Site { name: String }
    /// # impl Record for Site {
    /// #     fn field_value(&self, field: &str) -> Value<'_> {
    /// #         match field {
    /// #             "name" => Value::Text(&self.name),
    /// #             _ => Value::Missing,
    /// #         }
    /// #     }
    /// # }
    /// # let sites = vec![Site { name: "North depot".into() }];
    /// let query = ListQuery::new().search("depot").search_in(["name"]);
    /// let page = query.evaluate(&sites, Site::accessor);
    /// # assert_eq!(page.total, 1);
    /// ```
    fn accessor<'a>(record: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        record.field_value(field)
    }
}

/// Conversion into the engine's epoch-millisecond [`Date`].
///
/// The derive macro calls this for fields marked `#[record(date)]`, so
/// date fields may be stored as [`Date`], raw milliseconds, or any of
/// the chrono types below.
pub trait AsDate {
    /// The value as a UTC epoch-millisecond date.
    fn as_date(&self) -> Date;
}

impl AsDate for Date {
    fn as_date(&self) -> Date {
        *self
    }
}

impl AsDate for i64 {
    fn as_date(&self) -> Date {
        Date::from_millis(*self)
    }
}

impl AsDate for DateTime<Utc> {
    fn as_date(&self) -> Date {
        Date::from(*self)
    }
}

impl AsDate for NaiveDate {
    fn as_date(&self) -> Date {
        Date::from(*self)
    }
}

impl AsDate for NaiveDateTime {
    fn as_date(&self) -> Date {
        Date::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    struct Site {
        name: String,
        devices: u32,
    }

    impl Record for Site {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::Text(&self.name),
                "devices" => Value::Number(Number::U64(self.devices as u64)),
                _ => Value::Missing,
            }
        }
    }

    #[test]
    fn accessor_matches_field_value() {
        let site = Site {
            name: "North depot".to_string(),
            devices: 4,
        };
        assert_eq!(Site::accessor(&site, "name"), site.field_value("name"));
        assert!(Site::accessor(&site, "ghost").is_missing());
    }

    #[test]
    fn as_date_conversions_agree() {
        let millis = 1_709_251_200_000i64;
        let date = Date::from_millis(millis);

        assert_eq!(date.as_date(), date);
        assert_eq!(millis.as_date(), date);

        let utc = DateTime::from_timestamp_millis(millis).unwrap();
        assert_eq!(utc.as_date(), date);
        assert_eq!(utc.naive_utc().as_date(), date);

        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(day.as_date(), date);
    }
}
