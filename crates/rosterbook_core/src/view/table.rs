//! Filtered, paginated roster table projection.
//!
//! # Responsibility
//! - Match records against a free-text filter across all five fields.
//! - Slice the matching rows into fixed-size pages.
//!
//! # Invariants
//! - Matching is recomputed from the full roster on every call; there is
//!   no incremental index to fall out of sync.
//! - `total_pages` is never below 1, even with zero matches.
//! - An out-of-range page yields an empty item list, never an error.
//! - Roster order is preserved through filtering and slicing.

use crate::model::student::{Field, Student};

/// Rows per page in the reference configuration.
pub const PAGE_SIZE: usize = 5;

/// View request: free-text filter plus 1-based page index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// Case-insensitive substring matched against every field; blank
    /// matches everything.
    pub filter: String,
    /// 1-based page index. Page 0 is clamped to 1.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl TableQuery {
    /// First page, no filter, default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// First page of the given filter.
    ///
    /// Callers changing the filter text should rebuild the query through
    /// this constructor; a filter change resets paging.
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            filter: String::new(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

/// One derived page of the filtered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Records on the requested page, in roster order.
    pub items: Vec<Student>,
    /// `max(1, ceil(matched / page_size))`.
    pub total_pages: usize,
    /// Total records matching the filter across all pages.
    pub matched: usize,
}

/// Builds the table view for one query against the full roster.
pub fn build_table_view(students: &[Student], query: &TableQuery) -> TableView {
    let needle = query.filter.to_lowercase();
    let page_size = query.page_size.max(1);

    let matches: Vec<&Student> = students
        .iter()
        .filter(|student| matches_filter(student, &needle))
        .collect();
    let matched = matches.len();
    let total_pages = matched.div_ceil(page_size).max(1);

    let page = query.page.max(1);
    let items = matches
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    TableView {
        items,
        total_pages,
        matched,
    }
}

fn matches_filter(student: &Student, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    Field::ORDER
        .iter()
        .any(|&field| student.field(field).to_lowercase().contains(needle))
}
