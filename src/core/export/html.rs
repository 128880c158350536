//! HTML exporter
//!
//! Renders `templates/catalog.html` with askama. Values are HTML-escaped by
//! the template engine.

use super::CatalogExporter;
use crate::core::models::Course;
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogTemplate<'a> {
    title: &'a str,
    courses: &'a [&'a Course],
}

/// Writes a standalone HTML page with one card per course
pub struct HtmlExporter {
    title: String,
}

impl HtmlExporter {
    /// Exporter with a custom page title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new("Course Catalog")
    }
}

impl CatalogExporter for HtmlExporter {
    fn render(&self, courses: &[&Course]) -> Result<String, Box<dyn Error>> {
        let template = CatalogTemplate {
            title: &self.title,
            courses,
        };
        Ok(template.render()?)
    }
}
