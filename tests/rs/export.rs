//! Integration tests for catalog exporters

use course_catalog::catalog::{CatalogGenerator, CatalogTables, QueryParams};
use course_catalog::export::{CatalogExporter, ExportFormat, HtmlExporter};
use course_catalog::models::Course;
use std::fs;
use tempfile::TempDir;

fn programming_courses() -> Vec<Course> {
    let catalog = CatalogGenerator::seeded(8).generate(&CatalogTables::builtin());
    catalog
        .filtered(&QueryParams::default().category("programming"))
        .into_iter()
        .cloned()
        .collect()
}

#[test]
fn csv_export_writes_one_row_per_course() {
    let courses = programming_courses();
    let refs: Vec<&Course> = courses.iter().collect();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("catalog.csv");

    ExportFormat::Csv
        .exporter()
        .export(&refs, &path)
        .expect("CSV export failed");

    let content = fs::read_to_string(&path).expect("Failed to read CSV");
    assert_eq!(content.lines().count(), courses.len() + 1);
    assert!(content.starts_with("id,title,category"));
    assert!(content.lines().skip(1).all(|line| line.contains(",programming,")));
}

#[test]
fn json_export_round_trips_courses() {
    let courses = programming_courses();
    let refs: Vec<&Course> = courses.iter().collect();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");

    ExportFormat::Json
        .exporter()
        .export(&refs, &path)
        .expect("JSON export failed");

    let content = fs::read_to_string(&path).expect("Failed to read JSON");
    let parsed: Vec<Course> = serde_json::from_str(&content).expect("Invalid JSON");
    assert_eq!(parsed, courses);
    assert!(content.contains("\"instructorImage\""));
}

#[test]
fn html_export_escapes_and_lists_courses() {
    let mut courses = programming_courses();
    courses.truncate(3);
    courses[0].title = "Tags <b> & Friends".to_string();
    let refs: Vec<&Course> = courses.iter().collect();

    let html = HtmlExporter::new("Programming")
        .render(&refs)
        .expect("HTML render failed");

    assert!(html.contains("<title>Programming</title>"));
    assert!(html.contains("Tags &lt;b&gt; &amp; Friends"));
    assert!(!html.contains("<b> & Friends"));
    assert!(html.contains(&format!("id=\"{}\"", courses[1].id)));
}

#[test]
fn empty_export_is_valid() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.json");

    ExportFormat::Json
        .exporter()
        .export(&[], &path)
        .expect("JSON export failed");

    let parsed: Vec<Course> =
        serde_json::from_str(&fs::read_to_string(&path).expect("Failed to read JSON"))
            .expect("Invalid JSON");
    assert!(parsed.is_empty());
}
