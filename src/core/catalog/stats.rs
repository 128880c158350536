//! Summary statistics over a catalog

use super::Catalog;
use crate::core::models::Level;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Aggregate figures shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of courses
    pub total_courses: usize,
    /// Number of categories
    pub total_categories: usize,
    /// Number of featured courses
    pub featured_courses: usize,
    /// Number of distinct instructor names
    pub instructors: usize,
    /// Mean rating, 0.0 for an empty catalog
    pub average_rating: f64,
    /// Lessons across all courses
    pub total_lessons: u64,
    /// Courses per level
    pub by_level: BTreeMap<Level, usize>,
}

impl Catalog {
    /// Compute summary statistics
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let courses = self.courses();
        let instructors: HashSet<&str> = courses
            .iter()
            .map(|c| c.instructor.as_str())
            .filter(|name| !name.is_empty())
            .collect();

        let mut by_level: BTreeMap<Level, usize> = Level::ALL.iter().map(|l| (*l, 0)).collect();
        for course in courses {
            *by_level.entry(course.level).or_insert(0) += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let average_rating = if courses.is_empty() {
            0.0
        } else {
            courses.iter().map(|c| c.rating).sum::<f64>() / courses.len() as f64
        };

        CatalogStats {
            total_courses: courses.len(),
            total_categories: self.categories().len(),
            featured_courses: courses.iter().filter(|c| c.featured).count(),
            instructors: instructors.len(),
            average_rating,
            total_lessons: courses.iter().map(|c| u64::from(c.lessons)).sum(),
            by_level,
        }
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Courses:       {}", self.total_courses)?;
        writeln!(f, "Categories:    {}", self.total_categories)?;
        writeln!(f, "Featured:      {}", self.featured_courses)?;
        writeln!(f, "Instructors:   {}", self.instructors)?;
        writeln!(f, "Avg. rating:   {:.2}", self.average_rating)?;
        writeln!(f, "Lessons:       {}", self.total_lessons)?;
        for (level, count) in &self.by_level {
            writeln!(f, "  {level:<13}{count}")?;
        }
        Ok(())
    }
}
