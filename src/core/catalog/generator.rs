//! Catalog generation from static tables
//!
//! Structural fields (id, category, subcategory, level, image, instructor,
//! tags) are a pure function of the topic index. Numeric fields are drawn
//! from a [`SmallRng`]; pass a seed for reproducible fixtures, otherwise they
//! differ between runs.

use super::tables::{CatalogTables, CategorySeed};
use super::Catalog;
use crate::core::models::course::title_tags;
use crate::core::models::{Course, Level};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Courses promoted on the home page
pub const DEFAULT_FEATURED_LIMIT: usize = 8;

/// Probability that a generated course is featured
const FEATURED_PROBABILITY: f64 = 0.15;

/// Expands [`CatalogTables`] into a [`Catalog`]
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    rng: SmallRng,
    seed: Option<u64>,
}

impl CatalogGenerator {
    /// Create a generator; `None` draws numeric fields from OS entropy
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        Self { rng, seed }
    }

    /// Generator whose numeric fields are reproducible for `seed`
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Generator with non-reproducible numeric fields
    #[must_use]
    pub fn unseeded() -> Self {
        Self::new(None)
    }

    /// Seed in use, if any
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Build the full catalog from `tables`
    ///
    /// Empty topic or category tables produce an empty catalog with zero counts.
    pub fn generate(&mut self, tables: &CatalogTables<'_>) -> Catalog {
        let courses: Vec<Course> = tables
            .topics
            .iter()
            .enumerate()
            .filter_map(|(index, topic)| {
                let category = assign_category(index, tables.topics.len(), tables.categories)?;
                Some(self.course(index, topic, category, tables))
            })
            .collect();

        crate::debug!(
            "Generated {} courses across {} categories (seed: {})",
            courses.len(),
            tables.categories.len(),
            self.seed
                .map_or_else(|| "none".to_string(), |s| s.to_string())
        );

        Catalog::from_seeds(courses, tables.categories)
    }

    fn course(
        &mut self,
        index: usize,
        topic: &str,
        category: &CategorySeed<'_>,
        tables: &CatalogTables<'_>,
    ) -> Course {
        let rating_raw: f64 = self.rng.gen::<f64>().mul_add(1.5, 3.5);

        Course {
            id: format!("course-{}", index + 1),
            title: topic.to_string(),
            description: describe(topic),
            image: cyclic(tables.course_images, index).to_string(),
            category: category.id.to_string(),
            subcategory: cyclic(category.subcategories, index).to_string(),
            level: Level::ALL[index % Level::ALL.len()],
            duration: format!("{} weeks", self.rng.gen_range(4..20)),
            students: format!("{}K", self.rng.gen_range(10..210)),
            rating: (rating_raw * 10.0).round() / 10.0,
            reviews: self.rng.gen_range(500..15_500),
            instructor: cyclic(tables.instructors, index).to_string(),
            instructor_image: cyclic(tables.instructor_images, index).to_string(),
            tags: title_tags(topic),
            lessons: self.rng.gen_range(15..75),
            projects: self.rng.gen_range(3..23),
            certificates: true,
            featured: self.rng.gen_bool(FEATURED_PROBABILITY),
        }
    }
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self::unseeded()
    }
}

/// Size of each contiguous topic bucket: `ceil(topic_count / category_count)`
///
/// Returns 0 when either table is empty.
#[must_use]
pub const fn bucket_size(topic_count: usize, category_count: usize) -> usize {
    if topic_count == 0 || category_count == 0 {
        0
    } else {
        topic_count.div_ceil(category_count)
    }
}

/// Index of the category owning topic `index`, clamped to the last category
#[must_use]
pub fn category_index(index: usize, topic_count: usize, category_count: usize) -> Option<usize> {
    let bucket = bucket_size(topic_count, category_count);
    if bucket == 0 {
        return None;
    }
    Some((index / bucket).min(category_count - 1))
}

fn assign_category<'t, 'a>(
    index: usize,
    topic_count: usize,
    categories: &'t [CategorySeed<'a>],
) -> Option<&'t CategorySeed<'a>> {
    category_index(index, topic_count, categories.len()).and_then(|i| categories.get(i))
}

/// `pool[index mod pool.len()]`, or an empty string for an empty pool
fn cyclic<'a>(pool: &[&'a str], index: usize) -> &'a str {
    if pool.is_empty() {
        ""
    } else {
        pool[index % pool.len()]
    }
}

fn describe(topic: &str) -> String {
    format!(
        "Master {} with hands-on projects, real-world examples, and expert guidance. \
         This comprehensive course covers everything from basics to advanced concepts.",
        topic.to_lowercase()
    )
}
