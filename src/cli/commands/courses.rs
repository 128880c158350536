//! Catalog browsing commands: `courses`, `show`, `categories`, `featured`, `stats`

use super::emit;
use crate::args::OutputFormat;
use course_catalog::catalog::{Catalog, QueryParams};
use course_catalog::models::Course;
use course_catalog::verbose;

const TITLE_WIDTH: usize = 44;

/// List one page of courses matching `params`
pub fn run_list(catalog: &Catalog, params: &QueryParams, format: OutputFormat) {
    let page = catalog.query(params);
    emit(&page, format, || {
        if page.items.is_empty() {
            println!("No courses found");
        } else {
            print_table(&page.items);
        }
        println!(
            "\nPage {} of {} ({} courses)",
            page.page_number, page.total_pages, page.total_count
        );
        if let Some(category_id) = params.category_id.as_deref() {
            let subcategories = catalog.subcategories_for(category_id);
            if !subcategories.is_empty() {
                verbose!("Subcategories: {}", subcategories.join(", "));
            }
        }
        if page.has_next() {
            verbose!("More results: --page {}", page.page_number + 1);
        }
    });
}

/// Show one course in full, exiting with status 1 when the id is unknown
pub fn run_show(catalog: &Catalog, id: &str, format: OutputFormat) {
    let Some(course) = catalog.find_by_id(id) else {
        eprintln!("Course not found: '{id}'");
        std::process::exit(1);
    };

    emit(course, format, || print_details(catalog, course));
}

/// List categories with their course counts and subcategories
pub fn run_categories(catalog: &Catalog, format: OutputFormat) {
    emit(catalog.categories(), format, || {
        for category in catalog.categories() {
            println!("{} {:<20} {}", category.icon, category.label(), category.id);
            println!("    {}", category.description);
            println!("    {}", category.subcategories.join(", "));
        }
    });
}

/// List up to `limit` featured courses in catalog order
pub fn run_featured(catalog: &Catalog, limit: usize, format: OutputFormat) {
    let featured = catalog.featured(limit);
    emit(&featured, format, || {
        if featured.is_empty() {
            println!("No featured courses");
        } else {
            print_table(&featured);
        }
    });
}

/// Print summary statistics
pub fn run_stats(catalog: &Catalog, format: OutputFormat) {
    let stats = catalog.stats();
    emit(&stats, format, || print!("{stats}"));
}

fn print_table(courses: &[&Course]) {
    println!(
        "{:<11} {:<TITLE_WIDTH$} {:<14} {:<12} {:>6} {:>8} {:>6}",
        "ID", "TITLE", "CATEGORY", "LEVEL", "RATING", "STUDENTS", "WEEKS"
    );
    for course in courses {
        println!(
            "{:<11} {:<TITLE_WIDTH$} {:<14} {:<12} {:>6.1} {:>8} {:>6}",
            course.id,
            truncate(&course.title, TITLE_WIDTH),
            course.category,
            course.level,
            course.rating,
            course.students,
            course.duration.trim_end_matches(" weeks"),
        );
    }
}

fn print_details(catalog: &Catalog, course: &Course) {
    let category = catalog
        .category(&course.category)
        .map_or(course.category.as_str(), |c| c.name.as_str());

    println!("{} ({})", course.title, course.id);
    println!("\n{}\n", course.description);
    println!("Category:     {category} / {}", course.subcategory);
    println!("Level:        {}", course.level);
    println!("Duration:     {}", course.duration);
    println!("Instructor:   {}", course.instructor);
    println!(
        "Rating:       {:.1} ({} reviews)",
        course.rating, course.reviews
    );
    println!("Students:     {}", course.students);
    println!("Lessons:      {}", course.lessons);
    println!("Projects:     {}", course.projects);
    println!(
        "Certificate:  {}",
        if course.certificates { "yes" } else { "no" }
    );
    if course.featured {
        println!("Featured:     yes");
    }
    println!("Tags:         {}", course.tags.join(", "));
}

/// Shorten `text` to at most `width` characters, marking the cut with `…`
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
