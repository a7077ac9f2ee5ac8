//! Query state and the evaluation pipeline.
//!
//! [`ListQuery`] holds everything a table view tracks about its
//! controls: the search term and the fields it scans, filter
//! predicates, sort keys, and the page cursor. Reducer methods consume
//! and return the query so updates chain; none of them touch the
//! records. Evaluation runs the whole pipeline over a record slice:
//!
//! ```text
//! records -> search -> filters -> sort -> paginate -> ListPage
//! ```
//!
//! Every evaluation recomputes from the full slice, so the same query
//! can be replayed whenever the underlying data changes. Reducers that
//! change which records match (search and filter) reset the page
//! cursor to 1; sort and page-size changes keep it, and the cursor is
//! re-clamped against the new page count on evaluation.

use crate::error::{QueryError, Result};
use crate::filter::{self, Filter, Scalar, Test};
use crate::page::{ListPage, PagePlan, DEFAULT_PAGE_SIZE};
use crate::search;
use crate::sort::{self, Dir, SortKey};
use crate::value::Value;

/// The state of a searchable, filterable, sortable, paginated list.
///
/// A fresh query matches every record, sorts nothing, and shows page 1
/// of [`DEFAULT_PAGE_SIZE`] records.
///
/// # Example
///
/// ```
/// use listwise::{ListQuery, Value};
///
/// struct Site {
///     name: String,
///     city: Option<String>,
/// }
///
/// fn accessor<'a>(site: &'a Site, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(&site.name),
///         "city" => site.city.as_deref().map_or(Value::Missing, Value::Text),
///         _ => Value::Missing,
///     }
/// }
///
/// let sites = vec![
///     Site { name: "North depot".into(), city: Some("Bogotá".into()) },
///     Site { name: "South depot".into(), city: Some("Lima".into()) },
///     Site { name: "Lab bench".into(), city: None },
/// ];
///
/// let query = ListQuery::new()
///     .search("depot")
///     .search_in(["name", "city"])
///     .sort_asc("city")
///     .page_size(10);
///
/// let page = query.evaluate(&sites, accessor);
/// assert_eq!(page.total, 2);
/// assert_eq!(page.items[0].city.as_deref(), Some("Bogotá"));
/// ```
#[derive(Debug, Clone)]
pub struct ListQuery {
    term: String,
    search_fields: Vec<String>,
    filters: Vec<Filter>,
    sort: Vec<SortKey>,
    page: usize,
    page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery::new()
    }
}

impl ListQuery {
    /// Creates a match-all query on page 1.
    pub fn new() -> Self {
        ListQuery {
            term: String::new(),
            search_fields: Vec::new(),
            filters: Vec::new(),
            sort: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    // ========================================================================
    // Reducers
    // ========================================================================

    /// Sets the search term and resets to page 1.
    ///
    /// An empty term matches every record. Matching is a
    /// case-insensitive substring test over the fields named by
    /// [`search_in`](ListQuery::search_in).
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self.page = 1;
        self
    }

    /// Replaces the set of fields the search term scans and resets to
    /// page 1.
    ///
    /// A record matches when any one named field contains the term.
    /// With an empty field set, a non-empty term matches nothing.
    pub fn search_in<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self.page = 1;
        self
    }

    /// Adds a filter and resets to page 1.
    ///
    /// Filters combine with AND: a record must pass every one.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self.page = 1;
        self
    }

    /// Adds an equality filter; text compares case-insensitively.
    pub fn filter_eq(self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.filter(Filter::equals(field, value))
    }

    /// Adds a filter keeping records where the field has a non-empty
    /// value.
    pub fn filter_present(self, field: impl Into<String>) -> Self {
        self.filter(Filter::present(field))
    }

    /// Adds a filter keeping records where the field is missing or
    /// blank.
    pub fn filter_absent(self, field: impl Into<String>) -> Self {
        self.filter(Filter::absent(field))
    }

    /// Adds a filter with a caller-supplied test on the field's value.
    pub fn filter_custom<F>(self, field: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value<'_>) -> bool + Send + Sync + 'static,
    {
        self.filter(Filter::custom(field, test))
    }

    /// Drops all filters and resets to page 1.
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self.page = 1;
        self
    }

    /// Replaces the sort order with a single key.
    ///
    /// Reordering does not move the page cursor; the cursor is
    /// re-clamped on evaluation if needed.
    pub fn sort_by(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort = vec![SortKey::new(field, dir)];
        self
    }

    /// Appends a tie-breaking sort key after the existing ones.
    pub fn then_by(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort.push(SortKey::new(field, dir));
        self
    }

    /// Sorts ascending by one field.
    pub fn sort_asc(self, field: impl Into<String>) -> Self {
        self.sort_by(field, Dir::Asc)
    }

    /// Sorts descending by one field.
    pub fn sort_desc(self, field: impl Into<String>) -> Self {
        self.sort_by(field, Dir::Desc)
    }

    /// Cycles the sort the way a column header click does.
    ///
    /// Clicking the field already sorted flips its direction; clicking
    /// any other field sorts it ascending. Either way the field becomes
    /// the only sort key.
    pub fn toggle_sort(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        let dir = match self.sort.first() {
            Some(key) if key.field == field => key.dir.flip(),
            _ => Dir::Asc,
        };
        self.sort = vec![SortKey::new(field, dir)];
        self
    }

    /// Drops all sort keys, restoring input order.
    pub fn clear_sort(mut self) -> Self {
        self.sort.clear();
        self
    }

    /// Moves the cursor to a 1-based page.
    ///
    /// The value is stored as given; evaluation clamps it into the
    /// valid range for the filtered collection.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size, keeping the cursor where it is.
    ///
    /// A size of 0 is treated as 1 during evaluation. The cursor is
    /// re-clamped, not reset, when the size changes.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Fields the search term scans.
    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Active filters, in the order added.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Active sort keys, primary first.
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort
    }

    /// The requested 1-based page, before clamping.
    pub fn get_page(&self) -> usize {
        self.page
    }

    /// The requested page size, before clamping.
    pub fn get_page_size(&self) -> usize {
        self.page_size
    }

    /// Whether this query keeps every record: no search term and no
    /// filters.
    pub fn is_match_all(&self) -> bool {
        self.term.is_empty() && self.filters.is_empty()
    }

    /// One-line rendering of the query state, for logs and prompts.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if !self.term.is_empty() {
            parts.push(format!(
                "search \"{}\" in [{}]",
                self.term,
                self.search_fields.join(", ")
            ));
        }

        for filter in &self.filters {
            let clause = match &filter.test {
                Test::Equals(scalar) => format!("{} = {}", filter.field, scalar),
                Test::Present(true) => format!("{} present", filter.field),
                Test::Present(false) => format!("{} absent", filter.field),
                Test::Custom(_) => format!("{} matches custom test", filter.field),
            };
            parts.push(clause);
        }

        if parts.is_empty() {
            parts.push("all records".to_string());
        }

        if !self.sort.is_empty() {
            let keys: Vec<String> = self
                .sort
                .iter()
                .map(|key| format!("{} {}", key.field, key.dir))
                .collect();
            parts.push(format!("sort by {}", keys.join(", ")));
        }

        parts.push(format!("page {} (size {})", self.page, self.page_size));
        parts.join(", ")
    }

    /// Checks every field this query names against a known-field list.
    ///
    /// Evaluation never calls this; unknown fields simply read as
    /// [`Value::Missing`] there. Call it at an input boundary to reject
    /// typos with a useful error instead.
    pub fn check_fields(&self, known: &[&str]) -> Result<()> {
        let mut unknown: Vec<String> = Vec::new();
        let mut note = |field: &str| {
            if !known.contains(&field) && !unknown.iter().any(|f| f == field) {
                unknown.push(field.to_string());
            }
        };

        for field in &self.search_fields {
            note(field);
        }
        for filter in &self.filters {
            note(&filter.field);
        }
        for key in &self.sort {
            note(&key.field);
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(QueryError::UnknownFields(unknown))
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests one record against the search term and all filters.
    pub fn matches<T, F>(&self, record: &T, accessor: F) -> bool
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        let folded = self.term.to_lowercase();
        search::matches_folded(record, &folded, &self.search_fields, &accessor)
            && filter::passes_all(record, &self.filters, &accessor)
    }

    /// Counts the records that survive search and filters, across all
    /// pages.
    pub fn count<T, F>(&self, records: &[T], accessor: F) -> usize
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        let folded = self.term.to_lowercase();
        records
            .iter()
            .filter(|record| {
                search::matches_folded(*record, &folded, &self.search_fields, &accessor)
                    && filter::passes_all(*record, &self.filters, &accessor)
            })
            .count()
    }

    /// Runs the full pipeline and returns one page of borrowed records.
    ///
    /// Records are kept when they match the search term in any search
    /// field and pass every filter, sorted by the configured keys
    /// (stable, so input order breaks ties and survives an unknown sort
    /// field), and sliced to the clamped page. The input slice is never
    /// reordered or mutated, and evaluation never fails: out-of-range
    /// cursors clamp and unknown fields read as [`Value::Missing`].
    pub fn evaluate<'a, T, F>(&self, records: &'a [T], accessor: F) -> ListPage<'a, T>
    where
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        let folded = self.term.to_lowercase();
        let mut kept: Vec<&'a T> = records
            .iter()
            .filter(|record| {
                search::matches_folded(*record, &folded, &self.search_fields, &accessor)
                    && filter::passes_all(*record, &self.filters, &accessor)
            })
            .collect();

        if !self.sort.is_empty() {
            kept.sort_by(|a, b| sort::compare_by_keys(*a, *b, &self.sort, &accessor));
        }

        let plan = PagePlan::plan(kept.len(), self.page, self.page_size);
        let items = kept[plan.range()].to_vec();

        ListPage {
            items,
            total: plan.total,
            page: plan.page,
            page_size: plan.page_size,
            total_pages: plan.total_pages,
        }
    }

    /// Like [`evaluate`](ListQuery::evaluate), but clones the page
    /// items out so the result owns its records.
    pub fn evaluate_cloned<T, F>(&self, records: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'v> F: Fn(&'v T, &str) -> Value<'v>,
    {
        self.evaluate(records, accessor)
            .items
            .into_iter()
            .cloned()
            .collect()
    }
}
