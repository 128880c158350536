//! Category model

use serde::{Deserialize, Serialize};

/// A grouping of courses (e.g., "Cloud Computing")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identifier referenced by [`Course::category`](super::Course::category)
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line description
    pub description: String,

    /// Symbolic icon key (e.g., "Code")
    pub icon: String,

    /// Symbolic color key for presentation (e.g., "emerald")
    pub color: String,

    /// Ordered subcategory names
    pub subcategories: Vec<String>,

    /// Number of courses in this category, derived once after generation
    pub course_count: usize,
}

impl Category {
    /// Short label used by category pickers: first word of the name plus the count
    #[must_use]
    pub fn label(&self) -> String {
        let first = self.name.split_whitespace().next().unwrap_or(&self.name);
        format!("{first} ({})", self.course_count)
    }

    /// Whether `name` is one of this category's subcategories
    #[must_use]
    pub fn has_subcategory(&self, name: &str) -> bool {
        self.subcategories.iter().any(|s| s == name)
    }
}
