//! CSV exporter

use super::CatalogExporter;
use crate::core::models::Course;
use std::error::Error;
use std::fmt::Write;

const HEADER: &str = "id,title,category,subcategory,level,duration,students,rating,reviews,\
instructor,lessons,projects,featured,tags";

/// Writes one row per course, tags joined with `;`
pub struct CsvExporter;

impl CatalogExporter for CsvExporter {
    fn render(&self, courses: &[&Course]) -> Result<String, Box<dyn Error>> {
        let mut out = String::with_capacity(128 * (courses.len() + 1));
        writeln!(out, "{HEADER}")?;
        for course in courses {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{:.1},{},{},{},{},{},{}",
                field(&course.id),
                field(&course.title),
                field(&course.category),
                field(&course.subcategory),
                course.level,
                field(&course.duration),
                field(&course.students),
                course.rating,
                course.reviews,
                field(&course.instructor),
                course.lessons,
                course.projects,
                course.featured,
                field(&course.tags.join(";")),
            )?;
        }
        Ok(out)
    }
}

/// Quote a value if it contains a delimiter, quote or newline
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
