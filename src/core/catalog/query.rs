//! Catalog query engine: lookup, search, filter, sort and paginate
//!
//! Every operation is total. Unknown ids, unrecognized sort keys and pages
//! past the end produce empty or default results, never errors. Each call
//! recomputes its answer from the full collection.

use super::Catalog;
use crate::core::models::Course;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sentinel filter value meaning "no restriction"
pub const ALL: &str = "all";

/// Courses per page on the catalog listing
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most reviews first (also the fallback for unknown keys)
    #[default]
    Popular,
    /// Highest rating first
    Rating,
    /// Largest enrollment first
    Students,
    /// Descending id, compared as strings (`course-9` precedes `course-80`)
    Newest,
    /// Title ascending, case-sensitive
    Alphabetical,
}

impl SortKey {
    /// Parse a sort key, falling back to [`SortKey::Popular`] for anything unrecognized
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "rating" => Self::Rating,
            "students" => Self::Students,
            "newest" => Self::Newest,
            "alphabetical" => Self::Alphabetical,
            _ => Self::Popular,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::Students => "students",
            Self::Newest => "newest",
            Self::Alphabetical => "alphabetical",
        }
    }

    fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            Self::Popular => b.reviews.cmp(&a.reviews),
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Students => b.student_count().cmp(&a.student_count()),
            Self::Newest => b.id.cmp(&a.id),
            Self::Alphabetical => a.title.cmp(&b.title),
        }
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a category filter combines with free-text search
///
/// `Replace` reproduces the catalog page: once a category is picked, the
/// search text no longer narrows the result. `Intersect` applies both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    /// The category's courses replace the search result
    #[default]
    Replace,
    /// The search result is restricted to the category
    Intersect,
}

impl FromStr for CategoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "intersect" => Ok(Self::Intersect),
            _ => Err(format!("Unknown category mode: '{s}' (expected replace or intersect)")),
        }
    }
}

impl fmt::Display for CategoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Intersect => f.write_str("intersect"),
        }
    }
}

/// Parameters of a catalog listing request
///
/// `None` and [`ALL`] both disable a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Free-text search
    pub search_text: Option<String>,
    /// Category id
    pub category_id: Option<String>,
    /// Subcategory name (exact match)
    pub subcategory: Option<String>,
    /// Level name (exact, case-sensitive match, e.g. "Beginner")
    pub level: Option<String>,
    /// Ordering
    pub sort: SortKey,
    /// 1-based page number
    pub page_number: usize,
    /// Courses per page
    pub page_size: usize,
    /// Category/search combination rule
    pub category_mode: CategoryMode,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search_text: None,
            category_id: None,
            subcategory: None,
            level: None,
            sort: SortKey::Popular,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            category_mode: CategoryMode::Replace,
        }
    }
}

impl QueryParams {
    /// Set the search text
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Filter by category id
    #[must_use]
    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    /// Filter by subcategory name
    #[must_use]
    pub fn subcategory(mut self, name: impl Into<String>) -> Self {
        self.subcategory = Some(name.into());
        self
    }

    /// Filter by level name
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the ordering
    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select a page
    #[must_use]
    pub const fn page(mut self, page_number: usize, page_size: usize) -> Self {
        self.page_number = page_number;
        self.page_size = page_size;
        self
    }

    /// Set the category/search combination rule
    #[must_use]
    pub const fn category_mode(mut self, mode: CategoryMode) -> Self {
        self.category_mode = mode;
        self
    }
}

/// One page of a catalog listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<'a> {
    /// Courses on this page
    pub items: Vec<&'a Course>,
    /// Matches across all pages
    pub total_count: usize,
    /// Requested page (1-based)
    pub page_number: usize,
    /// Requested page size
    pub page_size: usize,
    /// `ceil(total_count / page_size)`, 0 when `page_size` is 0
    pub total_pages: usize,
}

impl CatalogPage<'_> {
    /// Whether a later page has results
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Whether an earlier page exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1 && self.total_pages > 0
    }
}

/// Treat `None` and the [`ALL`] sentinel as "no filter"
fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| *v != ALL)
}

/// Stable sort of `courses` by `key`
pub fn sort_courses(courses: &mut [&Course], key: SortKey) {
    courses.sort_by(|a, b| key.compare(a, b));
}

impl Catalog {
    /// Exact lookup by id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Course> {
        self.courses().iter().find(|c| c.id == id)
    }

    /// Courses in category `category_id`, in collection order
    #[must_use]
    pub fn by_category(&self, category_id: &str) -> Vec<&Course> {
        self.courses()
            .iter()
            .filter(|c| c.category == category_id)
            .collect()
    }

    /// Case-insensitive substring search over title, description, tags,
    /// instructor and subcategory
    ///
    /// The empty query matches every course.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let needle = query.to_lowercase();
        self.courses()
            .iter()
            .filter(|c| c.matches(&needle))
            .collect()
    }

    /// The full filtered and sorted result of `params`, without pagination
    #[must_use]
    pub fn filtered(&self, params: &QueryParams) -> Vec<&Course> {
        let search_text = params.search_text.as_deref().unwrap_or_default();
        let mut courses = if search_text.is_empty() {
            self.courses().iter().collect()
        } else {
            self.search(search_text)
        };

        if let Some(category_id) = active(params.category_id.as_deref()) {
            courses = match params.category_mode {
                CategoryMode::Replace => self.by_category(category_id),
                CategoryMode::Intersect => {
                    courses.retain(|c| c.category == category_id);
                    courses
                }
            };
        }

        if let Some(level) = active(params.level.as_deref()) {
            courses.retain(|c| c.level.as_str() == level);
        }

        if let Some(subcategory) = active(params.subcategory.as_deref()) {
            courses.retain(|c| c.subcategory == subcategory);
        }

        sort_courses(&mut courses, params.sort);
        courses
    }

    /// Filter, sort and paginate
    ///
    /// Page numbers start at 1. Page 0, a zero page size or a page past the
    /// end yield no items; `total_count` is always the full match count.
    #[must_use]
    pub fn query(&self, params: &QueryParams) -> CatalogPage<'_> {
        let matches = self.filtered(params);
        let total_count = matches.len();
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size)
        };

        let items = params
            .page_number
            .checked_sub(1)
            .and_then(|page| page.checked_mul(params.page_size))
            .map_or_else(Vec::new, |start| {
                matches
                    .into_iter()
                    .skip(start)
                    .take(params.page_size)
                    .collect()
            });

        crate::debug!(
            "Catalog query matched {total_count} courses (sort: {}, page {}/{total_pages})",
            params.sort,
            params.page_number
        );

        CatalogPage {
            items,
            total_count,
            page_number: params.page_number,
            page_size: params.page_size,
            total_pages,
        }
    }
}
