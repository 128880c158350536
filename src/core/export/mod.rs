//! Export catalog listings to files
//!
//! Exporters receive the full filtered and sorted result of a query (no
//! pagination) and write it in one format.

pub mod csv;
pub mod html;
pub mod json;

pub use csv::CsvExporter;
pub use html::HtmlExporter;
pub use json::JsonExporter;

use crate::core::models::Course;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one course per row
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// Self-contained HTML listing
    Html,
}

impl ExportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// Exporter writing this format
    #[must_use]
    pub fn exporter(&self) -> Box<dyn CatalogExporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter),
            Self::Html => Box::new(HtmlExporter::default()),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for catalog exporters
pub trait CatalogExporter {
    /// Render `courses` to a string
    ///
    /// # Errors
    /// Returns an error if serialization or template rendering fails
    fn render(&self, courses: &[&Course]) -> Result<String, Box<dyn Error>>;

    /// Render `courses` and write them to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn export(&self, courses: &[&Course], output_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, self.render(courses)?)?;
        crate::info!(
            "Exported {} courses to {}",
            courses.len(),
            output_path.display()
        );
        Ok(())
    }
}
