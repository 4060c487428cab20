//! Roster query parameters and paged results.
//!
//! A [`RosterQuery`] is built once at the HTTP boundary and is already
//! clamped when it reaches the query pipeline. The pipeline answers with a
//! [`RosterPage`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeView;

/// Page used when none (or an unparseable one) is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none (or an unparseable one) is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A field the roster can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Store-assigned identifier.
    Id,
    /// Full name, case-insensitive.
    FullName,
    /// Job title, case-insensitive.
    JobTitle,
    /// Country, case-insensitive.
    Country,
    /// Gross salary, numeric.
    Salary,
    /// Creation timestamp.
    CreatedAt,
}

impl SortField {
    /// Looks up a sort field by its query-string key (e.g. `"fullName"`).
    ///
    /// Returns `None` for anything outside the whitelist.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::SortField;
    ///
    /// assert_eq!(SortField::from_key("salary"), Some(SortField::Salary));
    /// assert_eq!(SortField::from_key("password"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" => Some(SortField::Id),
            "fullName" => Some(SortField::FullName),
            "jobTitle" => Some(SortField::JobTitle),
            "country" => Some(SortField::Country),
            "salary" => Some(SortField::Salary),
            "createdAt" => Some(SortField::CreatedAt),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Parses `"asc"` or `"desc"`, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if key.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }
}

/// The resolved sort order for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to compare on.
    pub field: SortField,
    /// Direction to order in.
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Resolves the requested field and direction keys.
    ///
    /// An unknown or absent field yields the default (newest first) and the
    /// requested direction is ignored. A known field with an unknown or
    /// absent direction sorts descending.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{SortDirection, SortField, SortSpec};
    ///
    /// let spec = SortSpec::resolve(Some("salary"), Some("asc"));
    /// assert_eq!(spec.field, SortField::Salary);
    /// assert_eq!(spec.direction, SortDirection::Asc);
    ///
    /// let fallback = SortSpec::resolve(Some("bogus"), Some("asc"));
    /// assert_eq!(fallback, SortSpec::default());
    /// ```
    pub fn resolve(field: Option<&str>, direction: Option<&str>) -> Self {
        match field.and_then(SortField::from_key) {
            Some(field) => Self {
                field,
                direction: direction
                    .and_then(SortDirection::from_key)
                    .unwrap_or(SortDirection::Desc),
            },
            None => Self::default(),
        }
    }
}

/// A normalized roster query.
///
/// Construct with [`RosterQuery::new`] or the builder methods so that page
/// and page size are always within range.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterQuery {
    page: u32,
    page_size: u32,
    /// Case-insensitive substring matched against name, title and country.
    pub search: Option<String>,
    /// Exact, case-insensitive country match.
    pub country: Option<String>,
    /// Exact, case-insensitive job title match.
    pub job_title: Option<String>,
    /// Inclusive lower salary bound.
    pub min_salary: Option<Decimal>,
    /// Inclusive upper salary bound.
    pub max_salary: Option<Decimal>,
    /// Resolved sort order.
    pub sort: SortSpec,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            country: None,
            job_title: None,
            min_salary: None,
            max_salary: None,
            sort: SortSpec::default(),
        }
    }
}

impl RosterQuery {
    /// Creates a query for the given page and page size, clamping both.
    ///
    /// Pages below 1 become 1; page sizes are clamped to `1..=100`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::RosterQuery;
    ///
    /// let query = RosterQuery::new(-5, 200);
    /// assert_eq!(query.page(), 1);
    /// assert_eq!(query.page_size(), 100);
    /// ```
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: clamp_to_u32(page, 1, u32::MAX),
            page_size: clamp_to_u32(page_size, 1, MAX_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// The one-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The number of records per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records skipped before the page starts.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }

    /// Sets the free-text search term. Blank terms clear the filter; any
    /// other term is kept exactly as given, surrounding whitespace included.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = non_blank(term.into());
        self
    }

    /// Sets the country filter. Blank values clear the filter.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_blank(country.into());
        self
    }

    /// Sets the job title filter. Blank values clear the filter.
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = non_blank(job_title.into());
        self
    }

    /// Sets the inclusive salary bounds.
    pub fn with_salary_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_salary = min;
        self.max_salary = max;
        self
    }

    /// Sets the sort order.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }
}

fn clamp_to_u32(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Pagination metadata for a roster page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// The page that was returned.
    pub page: u32,
    /// The page size that was applied.
    pub limit: u32,
    /// Records matching the search and filters, before paging.
    pub total: usize,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

impl Pagination {
    /// Builds pagination metadata for a query and its filtered total.
    pub fn new(query: &RosterQuery, total: usize) -> Self {
        let limit = query.page_size();
        Self {
            page: query.page(),
            limit,
            total,
            total_pages: total.div_ceil(limit as usize),
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPage {
    /// The employees on this page, annotated with net salary.
    pub data: Vec<EmployeeView>,
    /// Paging metadata.
    pub pagination: Pagination,
}
