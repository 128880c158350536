//! The in-memory course catalog
//!
//! A [`Catalog`] is built once by [`CatalogGenerator`] and never mutated.
//! Category counts are derived from the finished course list when the
//! catalog is constructed.

pub mod generator;
pub mod query;
pub mod stats;
pub mod tables;

pub use generator::{CatalogGenerator, DEFAULT_FEATURED_LIMIT};
pub use query::{CatalogPage, CategoryMode, QueryParams, SortKey, ALL, DEFAULT_PAGE_SIZE};
pub use stats::CatalogStats;
pub use tables::{CatalogTables, CategorySeed};

use crate::core::models::{Category, Course};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static GLOBAL: LazyLock<Catalog> =
    LazyLock::new(|| CatalogGenerator::unseeded().generate(&CatalogTables::builtin()));

/// Immutable course collection plus its category taxonomy
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    categories: Vec<Category>,
    course_counts: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, recomputing every category's `course_count` from `courses`
    ///
    /// Any count already present on `categories` is ignored.
    #[must_use]
    pub fn new(courses: Vec<Course>, categories: Vec<Category>) -> Self {
        let course_counts = count_by_category(&courses);
        let categories = categories
            .into_iter()
            .map(|category| Category {
                course_count: course_counts.get(&category.id).copied().unwrap_or(0),
                ..category
            })
            .collect();

        Self {
            courses,
            categories,
            course_counts,
        }
    }

    /// Build a catalog from generated courses and the seeds they were assigned from
    #[must_use]
    pub fn from_seeds(courses: Vec<Course>, seeds: &[CategorySeed<'_>]) -> Self {
        let categories = seeds
            .iter()
            .map(|seed| Category {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                icon: seed.icon.to_string(),
                color: seed.color.to_string(),
                subcategories: seed.subcategories.iter().map(ToString::to_string).collect(),
                course_count: 0,
            })
            .collect();
        Self::new(courses, categories)
    }

    /// Process-wide catalog generated from the built-in tables on first access
    ///
    /// Numeric fields are unseeded. Use [`CatalogGenerator`] directly when a
    /// reproducible catalog is needed.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// All courses in generation order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All categories in table order, with counts populated
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of courses in category `id` (0 if unknown)
    #[must_use]
    pub fn course_count(&self, id: &str) -> usize {
        self.course_counts.get(id).copied().unwrap_or(0)
    }

    /// Category id to course count, for every id referenced by a course
    #[must_use]
    pub const fn course_counts(&self) -> &BTreeMap<String, usize> {
        &self.course_counts
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The first `limit` featured courses, in collection order
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.featured).take(limit).collect()
    }

    /// Subcategory names offered for `category_id`; empty for unknown ids and `"all"`
    #[must_use]
    pub fn subcategories_for(&self, category_id: &str) -> &[String] {
        self.category(category_id)
            .map(|c| c.subcategories.as_slice())
            .unwrap_or(&[])
    }
}

fn count_by_category(courses: &[Course]) -> BTreeMap<String, usize> {
    courses.iter().fold(BTreeMap::new(), |mut counts, course| {
        *counts.entry(course.category.clone()).or_insert(0) += 1;
        counts
    })
}
