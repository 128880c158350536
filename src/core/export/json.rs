//! JSON exporter

use super::CatalogExporter;
use crate::core::models::Course;
use std::error::Error;

/// Writes courses as a pretty-printed JSON array with camelCase keys
pub struct JsonExporter;

impl CatalogExporter for JsonExporter {
    fn render(&self, courses: &[&Course]) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(courses)?)
    }
}
