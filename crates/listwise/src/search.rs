//! Free-text search across configured record fields.
//!
//! The search term and each field's stringified value are lowercased and
//! matched by substring containment, OR'd across the configured fields.
//! An empty term matches every record; a missing field never matches a
//! non-empty term.

use crate::value::Value;

/// Tests whether any of `fields` on `record` contains `term`.
///
/// Case-insensitive substring containment, OR'd across the listed fields.
/// An empty `term` always matches; an empty field list with a non-empty
/// term matches nothing.
///
/// # Example
///
/// ```
/// use listwise::{search_matches, Value};
///
/// struct Site {
///     city: String,
/// }
///
/// fn accessor<'a>(site: &'a Site, field: &str) -> Value<'a> {
///     match field {
///         "city" => Value::Text(&site.city),
///         _ => Value::Missing,
///     }
/// }
///
/// let site = Site { city: "Bogotá".to_string() };
/// let fields = vec!["city".to_string()];
///
/// assert!(search_matches(&site, "bog", &fields, accessor));
/// assert!(!search_matches(&site, "lima", &fields, accessor));
/// ```
pub fn search_matches<T, F>(record: &T, term: &str, fields: &[String], accessor: F) -> bool
where
    for<'v> F: Fn(&'v T, &str) -> Value<'v>,
{
    matches_folded(record, &term.to_lowercase(), fields, &accessor)
}

/// Like [`search_matches`], but takes a term that is already lowercased.
///
/// Evaluation lowercases the term once per call instead of once per record.
pub(crate) fn matches_folded<T, F>(
    record: &T,
    folded_term: &str,
    fields: &[String],
    accessor: &F,
) -> bool
where
    for<'v> F: Fn(&'v T, &str) -> Value<'v>,
{
    if folded_term.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        accessor(record, field)
            .search_text()
            .to_lowercase()
            .contains(folded_term)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Date, Number};

    struct Site {
        name: String,
        city: Option<String>,
        events: u32,
        installed: Option<Date>,
    }

    fn accessor<'a>(site: &'a Site, field: &str) -> Value<'a> {
        match field {
            "name" => Value::Text(&site.name),
            "city" => match &site.city {
                Some(city) => Value::Text(city),
                None => Value::Missing,
            },
            "events" => Value::Number(Number::U64(site.events as u64)),
            "installed" => match site.installed {
                Some(d) => Value::Date(d),
                None => Value::Missing,
            },
            _ => Value::Missing,
        }
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Site {
        Site {
            name: "Alpha".to_string(),
            city: Some("Bogotá".to_string()),
            events: 42,
            installed: Some(Date(1_709_251_200_000)),
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        let site = sample();
        assert!(search_matches(&site, "", &fields(&["city"]), accessor));
        assert!(search_matches(&site, "", &fields(&[]), accessor));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let site = sample();
        let f = fields(&["city"]);

        assert!(search_matches(&site, "bog", &f, accessor));
        assert!(search_matches(&site, "BOG", &f, accessor));
        assert!(search_matches(&site, "bogotá", &f, accessor));
        assert!(!search_matches(&site, "lima", &f, accessor));
    }

    #[test]
    fn or_across_fields() {
        let site = sample();
        let f = fields(&["name", "city"]);

        // Matches name but not city
        assert!(search_matches(&site, "alph", &f, accessor));
        // Matches city but not name
        assert!(search_matches(&site, "got", &f, accessor));
        // Matches neither
        assert!(!search_matches(&site, "zzz", &f, accessor));
    }

    #[test]
    fn missing_field_never_matches() {
        let site = Site {
            city: None,
            ..sample()
        };
        assert!(!search_matches(&site, "bog", &fields(&["city"]), accessor));
        // Still matches via the empty term rule
        assert!(search_matches(&site, "", &fields(&["city"]), accessor));
    }

    #[test]
    fn unknown_field_never_matches() {
        let site = sample();
        assert!(!search_matches(&site, "bog", &fields(&["no_such"]), accessor));
    }

    #[test]
    fn empty_field_list_with_term_matches_nothing() {
        let site = sample();
        assert!(!search_matches(&site, "bog", &fields(&[]), accessor));
    }

    #[test]
    fn numbers_and_dates_match_by_rendering() {
        let site = sample();

        assert!(search_matches(&site, "42", &fields(&["events"]), accessor));
        assert!(!search_matches(&site, "43", &fields(&["events"]), accessor));

        // Dates render as RFC 3339 UTC, so month prefixes are searchable
        assert!(search_matches(
            &site,
            "2024-03",
            &fields(&["installed"]),
            accessor
        ));
    }
}
