//! A small catalog browser that puts the whole Listwise pipeline on
//! one screen.
//!
//! `tcat` ships a dozen spreadsheet templates as embedded JSON and
//! exposes search, filtering, sorting, and pagination as flags:
//!
//! ```text
//! tcat --search grid
//! tcat --described no --sort cells:desc
//! tcat --sort updated_at:desc --page 2 --page-size 4
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use listwise::{Date, Dir, ListPage, ListQuery, Record};
use serde::Deserialize;

/// One catalog entry, as stored in `templates.json`.
#[derive(Debug, Clone, Deserialize, Record)]
struct Template {
    #[record(text)]
    name: String,
    #[record(text)]
    description: Option<String>,
    #[record(number)]
    cells: u32,
    /// Milliseconds since the Unix epoch.
    #[record(date)]
    updated_at: Option<Date>,
}

static CATALOG: &str = include_str!("templates.json");

#[derive(Parser)]
#[command(name = "tcat", version, about = "Browse the bundled template catalog")]
struct Cli {
    /// Keep templates whose name or description contains this text.
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Keep only templates with (yes) or without (no) a description.
    #[arg(long, value_enum, value_name = "YES|NO")]
    described: Option<Described>,

    /// Sort order: a field name, optionally followed by ":asc" or
    /// ":desc".
    #[arg(long, value_name = "FIELD[:DIR]", default_value = "name")]
    sort: String,

    /// 1-based page to show.
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    page: usize,

    /// Rows per page.
    #[arg(long, value_name = "N", default_value_t = 5)]
    page_size: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Described {
    Yes,
    No,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let templates = load_catalog()?;
    let query = build_query(cli)?;
    let page = query.evaluate(&templates, Template::accessor);
    render(&query, &page);
    Ok(())
}

fn load_catalog() -> Result<Vec<Template>> {
    serde_json::from_str(CATALOG).context("the bundled catalog is not valid JSON")
}

/// Translates CLI flags into a query, rejecting unknown field names
/// before evaluation would silently treat them as missing.
fn build_query(cli: &Cli) -> Result<ListQuery> {
    let (field, dir) = parse_sort(&cli.sort)?;

    let mut query = ListQuery::new().search_in([Template::NAME, Template::DESCRIPTION]);
    if let Some(term) = &cli.search {
        query = query.search(term);
    }
    query = match cli.described {
        Some(Described::Yes) => query.filter_present(Template::DESCRIPTION),
        Some(Described::No) => query.filter_absent(Template::DESCRIPTION),
        None => query,
    };

    // Search and filter edits reset the cursor, so the page flags come
    // last.
    let query = query
        .sort_by(field, dir)
        .page(cli.page)
        .page_size(cli.page_size);

    query
        .check_fields(Template::FIELD_NAMES)
        .context("unusable --sort value")?;
    Ok(query)
}

/// Splits `field` or `field:dir` into a sort key; a bare field sorts
/// ascending.
fn parse_sort(spec: &str) -> Result<(String, Dir)> {
    match spec.split_once(':') {
        Some((field, dir)) => {
            let dir = dir
                .parse::<Dir>()
                .with_context(|| format!("bad --sort value {spec:?}"))?;
            Ok((field.to_string(), dir))
        }
        None => Ok((spec.to_string(), Dir::Asc)),
    }
}

fn render(query: &ListQuery, page: &ListPage<'_, Template>) {
    println!("{}", query.describe());
    println!();
    if page.is_empty() {
        println!("  no templates match");
    }
    for template in &page.items {
        let updated = template
            .updated_at
            .map_or_else(|| "never".to_string(), |date| date.to_string());
        let description = template.description.as_deref().unwrap_or("-");
        println!(
            "  {:<16} {:>5} cells  updated {:<20}  {}",
            template.name, template.cells, updated, description
        );
    }
    println!();
    println!(
        "{} (page {} of {})",
        page.summary(),
        page.page,
        page.total_pages
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Template> {
        load_catalog().unwrap()
    }

    #[test]
    fn bundled_catalog_parses() {
        let templates = catalog();
        assert_eq!(templates.len(), 12);
        assert!(templates.iter().any(|t| t.updated_at.is_none()));
        assert!(templates.iter().any(|t| t.description.is_none()));
    }

    #[test]
    fn parse_sort_defaults_to_ascending() {
        assert_eq!(parse_sort("name").unwrap(), ("name".to_string(), Dir::Asc));
        assert_eq!(
            parse_sort("cells:desc").unwrap(),
            ("cells".to_string(), Dir::Desc)
        );
        assert!(parse_sort("cells:sideways").is_err());
    }

    #[test]
    fn cli_flags_become_a_query() {
        let cli = Cli::parse_from([
            "tcat",
            "--search",
            "grid",
            "--described",
            "yes",
            "--sort",
            "cells:desc",
            "--page-size",
            "3",
        ]);
        let query = build_query(&cli).unwrap();
        assert_eq!(query.term(), "grid");
        assert_eq!(query.filters().len(), 1);
        assert_eq!(query.sort_keys()[0].field, "cells");
        assert_eq!(query.sort_keys()[0].dir, Dir::Desc);
        assert_eq!(query.get_page_size(), 3);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let cli = Cli::parse_from(["tcat", "--sort", "nmae"]);
        assert!(build_query(&cli).is_err());
    }

    #[test]
    fn grid_search_spans_names_and_descriptions() {
        let templates = catalog();
        let cli = Cli::parse_from(["tcat", "--search", "grid"]);
        let query = build_query(&cli).unwrap();
        let page = query.evaluate(&templates, Template::accessor);
        // Habit grid by name, Budget tracker by description.
        assert_eq!(page.total, 2);
    }

    #[test]
    fn undescribed_filter_treats_blank_as_missing() {
        let templates = catalog();
        let cli = Cli::parse_from(["tcat", "--described", "no", "--page-size", "12"]);
        let query = build_query(&cli).unwrap();
        let page = query.evaluate(&templates, Template::accessor);
        assert_eq!(page.total, 4);
        assert!(page
            .items
            .iter()
            .any(|template| template.name == "Seating chart"));
    }

    #[test]
    fn newest_first_puts_missing_dates_last() {
        let templates = catalog();
        let cli = Cli::parse_from(["tcat", "--sort", "updated_at:desc", "--page-size", "12"]);
        let query = build_query(&cli).unwrap();
        let page = query.evaluate(&templates, Template::accessor);
        assert_eq!(page.items[0].name, "Sprint board");
        assert!(page.items[10].updated_at.is_none());
        assert!(page.items[11].updated_at.is_none());
    }
}
