//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Entry level
    Beginner,
    /// Some prior experience expected
    Intermediate,
    /// Expert material
    Advanced,
}

impl Level {
    /// All levels in the order they are assigned to generated courses
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Display name, as stored on the course and matched by level filters
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("Unknown level: {s}")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single course offering in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier in generation order (e.g., "course-12")
    pub id: String,

    /// Course name (e.g., "Python Fundamentals")
    pub title: String,

    /// Marketing blurb derived from the title
    pub description: String,

    /// Cover image URL
    pub image: String,

    /// Owning category id (e.g., "programming")
    pub category: String,

    /// Subcategory name within the owning category
    pub subcategory: String,

    /// Difficulty level
    pub level: Level,

    /// Duration label (e.g., "12 weeks")
    pub duration: String,

    /// Enrollment label in thousands (e.g., "120K")
    pub students: String,

    /// Average rating, one decimal place
    pub rating: f64,

    /// Number of reviews
    pub reviews: u32,

    /// Instructor display name
    pub instructor: String,

    /// Instructor portrait URL
    pub instructor_image: String,

    /// Search tags (the first words of the title)
    pub tags: Vec<String>,

    /// Number of lessons
    pub lessons: u32,

    /// Number of hands-on projects
    pub projects: u32,

    /// Whether a certificate is awarded on completion
    pub certificates: bool,

    /// Whether the course is promoted on the home page
    pub featured: bool,
}

impl Course {
    /// Enrollment as a number of thousands
    ///
    /// Strips a trailing `K` from [`Course::students`] and parses the rest.
    /// Malformed labels count as zero.
    #[must_use]
    pub fn student_count(&self) -> u64 {
        parse_students(&self.students)
    }

    /// Whether any searchable field contains `needle`
    ///
    /// `needle` must already be lowercased. Matches title, description,
    /// tags, instructor and subcategory.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
            || self.instructor.to_lowercase().contains(needle)
            || self.subcategory.to_lowercase().contains(needle)
    }
}

/// Parse an enrollment label such as `"120K"` into `120`
#[must_use]
pub fn parse_students(label: &str) -> u64 {
    let trimmed = label.trim();
    trimmed
        .strip_suffix('K')
        .unwrap_or(trimmed)
        .parse()
        .unwrap_or(0)
}

/// The first four whitespace-separated words of `title`
#[must_use]
pub fn title_tags(title: &str) -> Vec<String> {
    title.split_whitespace().take(4).map(str::to_string).collect()
}
