//! Integration tests for the Record derive macro.
//!
//! These tests verify that `#[derive(Record)]` generates correct field
//! lookups, name constants, and Missing handling from field annotations.

#![cfg(feature = "derive")]
#![allow(dead_code)] // Some fields are intentionally skipped for testing

use chrono::NaiveDate;
use listwise::{Date, ListQuery, Record, Value};

// =============================================================================
// Basic derive tests
// =============================================================================

#[derive(Record)]
struct BasicSite {
    #[record(text)]
    name: String,

    #[record(number)]
    devices: u32,

    #[record(text)]
    city: Option<String>,
}

#[test]
fn basic_derive_compiles() {
    let site = BasicSite {
        name: "North depot".to_string(),
        devices: 4,
        city: Some("Bogotá".to_string()),
    };

    assert_eq!(site.field_value("name"), Value::Text("North depot"));
    assert!(matches!(site.field_value("devices"), Value::Number(_)));
    assert_eq!(site.field_value("city"), Value::Text("Bogotá"));
}

#[test]
fn field_constants_generated() {
    assert_eq!(BasicSite::NAME, "name");
    assert_eq!(BasicSite::DEVICES, "devices");
    assert_eq!(BasicSite::CITY, "city");
}

#[test]
fn field_names_lists_queryable_fields_in_order() {
    assert_eq!(BasicSite::FIELD_NAMES, &["name", "devices", "city"]);
}

#[test]
fn unknown_field_returns_missing() {
    let site = BasicSite {
        name: "Test".to_string(),
        devices: 4,
        city: None,
    };

    assert_eq!(site.field_value("unknown"), Value::Missing);
    assert_eq!(site.field_value(""), Value::Missing);
}

#[test]
fn accessor_function_works() {
    let site = BasicSite {
        name: "Test".to_string(),
        devices: 4,
        city: None,
    };

    let value = BasicSite::accessor(&site, "name");
    assert_eq!(value, Value::Text("Test"));
}

#[test]
fn optional_fields_read_as_missing_when_none() {
    let site = BasicSite {
        name: "Spare".to_string(),
        devices: 0,
        city: None,
    };

    assert_eq!(site.field_value("city"), Value::Missing);
}

// =============================================================================
// Number kind tests
// =============================================================================

#[derive(Record)]
struct Meter {
    #[record(number)]
    count_i8: i8,

    #[record(number)]
    count_i32: i32,

    #[record(number)]
    count_i64: i64,

    #[record(number)]
    count_u8: u8,

    #[record(number)]
    count_u64: u64,

    #[record(number)]
    value_f32: f32,

    #[record(number)]
    value_f64: f64,

    #[record(number)]
    spare: Option<u32>,
}

#[test]
fn numeric_widths_all_map_to_numbers() {
    let meter = Meter {
        count_i8: -1,
        count_i32: -3,
        count_i64: -4,
        count_u8: 1,
        count_u64: 4,
        value_f32: 1.5,
        value_f64: 2.5,
        spare: Some(9),
    };

    for field in [
        "count_i8", "count_i32", "count_i64", "count_u8", "count_u64", "value_f32", "value_f64",
        "spare",
    ] {
        assert!(
            matches!(meter.field_value(field), Value::Number(_)),
            "field {field:?}"
        );
    }

    let empty = Meter {
        spare: None,
        ..meter
    };
    assert_eq!(empty.field_value("spare"), Value::Missing);
}

// =============================================================================
// Date kind tests
// =============================================================================

#[derive(Record)]
struct Probe {
    #[record(text)]
    name: String,

    #[record(date)]
    installed: Date,

    #[record(date)]
    calibrated: i64, // i64 has a built-in AsDate impl

    #[record(date)]
    last_seen: Option<Date>,

    #[record(date)]
    first_day: NaiveDate,
}

#[test]
fn date_fields_convert_through_as_date() {
    let probe = Probe {
        name: "P-1".to_string(),
        installed: Date::from_millis(1000),
        calibrated: 2000,
        last_seen: Some(Date::from_millis(3000)),
        first_day: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    };

    assert_eq!(probe.field_value("installed"), Value::Date(Date(1000)));
    assert_eq!(probe.field_value("calibrated"), Value::Date(Date(2000)));
    assert_eq!(probe.field_value("last_seen"), Value::Date(Date(3000)));
    assert_eq!(
        probe.field_value("first_day"),
        Value::Date(Date(1_709_251_200_000))
    );

    let silent = Probe {
        last_seen: None,
        ..probe
    };
    assert_eq!(silent.field_value("last_seen"), Value::Missing);
}

// =============================================================================
// Skip attribute and unannotated fields
// =============================================================================

#[derive(Record)]
struct SkipSite {
    #[record(text)]
    name: String,

    #[record(skip)]
    internal_id: u64,

    // No #[record] attribute, so not queryable
    notes: String,

    #[record(number)]
    devices: u32,
}

#[test]
fn skipped_and_unannotated_fields_read_as_missing() {
    let site = SkipSite {
        name: "Test".to_string(),
        internal_id: 12345,
        notes: "scratch".to_string(),
        devices: 5,
    };

    assert_eq!(site.field_value("internal_id"), Value::Missing);
    assert_eq!(site.field_value("notes"), Value::Missing);

    assert_eq!(site.field_value("name"), Value::Text("Test"));
    assert!(matches!(site.field_value("devices"), Value::Number(_)));
}

#[test]
fn skipped_fields_have_no_constants() {
    // NAME and DEVICES constants should exist
    assert_eq!(SkipSite::NAME, "name");
    assert_eq!(SkipSite::DEVICES, "devices");

    // INTERNAL_ID would be a compile error if the constant were generated
    assert_eq!(SkipSite::FIELD_NAMES, &["name", "devices"]);
}

// =============================================================================
// Rename attribute tests
// =============================================================================

#[derive(Record)]
struct RenamedSite {
    #[record(text, rename = "title")]
    name: String,

    #[record(number, rename = "units")]
    devices: u32,
}

#[test]
fn renamed_fields_use_the_query_name() {
    let site = RenamedSite {
        name: "Pier".to_string(),
        devices: 5,
    };

    assert_eq!(site.field_value("title"), Value::Text("Pier"));
    assert!(matches!(site.field_value("units"), Value::Number(_)));

    // Original names are not queryable
    assert_eq!(site.field_value("name"), Value::Missing);
    assert_eq!(site.field_value("devices"), Value::Missing);
}

#[test]
fn renamed_constants_use_the_query_name() {
    assert_eq!(RenamedSite::TITLE, "title");
    assert_eq!(RenamedSite::UNITS, "units");
    assert_eq!(RenamedSite::FIELD_NAMES, &["title", "units"]);
}

// =============================================================================
// Integration with ListQuery
// =============================================================================

#[derive(Record, Clone, Debug)]
struct Station {
    #[record(text)]
    name: String,

    #[record(text)]
    city: Option<String>,

    #[record(number)]
    devices: u32,

    #[record(date)]
    last_seen: Option<Date>,
}

fn sample_stations() -> Vec<Station> {
    vec![
        Station {
            name: "North depot".to_string(),
            city: Some("Bogotá".to_string()),
            devices: 12,
            last_seen: Some(Date::from_millis(3000)),
        },
        Station {
            name: "South depot".to_string(),
            city: Some("Lima".to_string()),
            devices: 7,
            last_seen: Some(Date::from_millis(1000)),
        },
        Station {
            name: "Lab bench".to_string(),
            city: None,
            devices: 1,
            last_seen: None,
        },
    ]
}

#[test]
fn query_with_derived_accessor() {
    let stations = sample_stations();

    let query = ListQuery::new()
        .search("depot")
        .search_in([Station::NAME, Station::CITY]);

    let page = query.evaluate(&stations, Station::accessor);
    assert_eq!(page.total, 2);
}

#[test]
fn query_with_field_constants() {
    let stations = sample_stations();

    let page = ListQuery::new()
        .filter_present(Station::CITY)
        .sort_desc(Station::DEVICES)
        .evaluate(&stations, Station::accessor);

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].name, "North depot");
}

#[test]
fn derived_missing_values_sink_in_sorts() {
    let stations = sample_stations();

    let page = ListQuery::new()
        .sort_asc(Station::LAST_SEEN)
        .evaluate(&stations, Station::accessor);

    assert_eq!(page.items[0].name, "South depot");
    assert_eq!(page.items[2].name, "Lab bench");
}

#[test]
fn check_fields_accepts_field_names() {
    let query = ListQuery::new()
        .search_in([Station::NAME])
        .filter_present(Station::CITY)
        .sort_asc(Station::LAST_SEEN);
    assert!(query.check_fields(Station::FIELD_NAMES).is_ok());

    let query = ListQuery::new().search_in(["ghost"]);
    assert!(query.check_fields(Station::FIELD_NAMES).is_err());
}
