//! Integration tests for catalog generation and category counts

use course_catalog::catalog::{CatalogGenerator, CatalogTables, CategorySeed};
use course_catalog::models::Level;

const TOPICS: &[&str] = &[
    "Rust Basics",
    "Go Basics",
    "Zig Basics",
    "Figma Intro",
    "Sketch Intro",
    "Color Theory",
];

const CATEGORIES: &[CategorySeed<'static>] = &[
    CategorySeed {
        id: "code",
        name: "Code",
        description: "Programming",
        icon: "Code",
        color: "emerald",
        subcategories: &["Systems"],
    },
    CategorySeed {
        id: "design",
        name: "Design",
        description: "Visual design",
        icon: "Palette",
        color: "pink",
        subcategories: &["UI", "Graphics"],
    },
];

#[test]
fn structural_fields_do_not_depend_on_seed() {
    let tables = CatalogTables::builtin();
    let first = CatalogGenerator::seeded(1).generate(&tables);
    let second = CatalogGenerator::seeded(2).generate(&tables);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.courses().iter().zip(second.courses()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.category, b.category);
        assert_eq!(a.subcategory, b.subcategory);
        assert_eq!(a.level, b.level);
        assert_eq!(a.instructor, b.instructor);
        assert_eq!(a.tags, b.tags);
    }
}

#[test]
fn same_seed_reproduces_catalog() {
    let tables = CatalogTables::builtin();
    let first = CatalogGenerator::seeded(42).generate(&tables);
    let second = CatalogGenerator::seeded(42).generate(&tables);
    assert_eq!(first.courses(), second.courses());
}

#[test]
fn builtin_counts_match_courses() {
    let catalog = CatalogGenerator::seeded(5).generate(&CatalogTables::builtin());

    assert_eq!(catalog.len(), CatalogTables::builtin().topics.len());
    assert_eq!(catalog.course_counts().values().sum::<usize>(), catalog.len());
    for category in catalog.categories() {
        assert_eq!(category.course_count, catalog.by_category(&category.id).len());
        assert_eq!(category.course_count, catalog.course_count(&category.id));
    }
}

#[test]
fn every_course_has_valid_category_and_subcategory() {
    let catalog = CatalogGenerator::seeded(5).generate(&CatalogTables::builtin());

    for course in catalog.courses() {
        let category = catalog.category(&course.category);
        assert!(category.is_some(), "{} has unknown category", course.id);
        assert!(category.is_some_and(|c| c.has_subcategory(&course.subcategory)));
        assert!((3.5..=5.0).contains(&course.rating));
        assert!(course.tags.len() <= 4);
    }
}

#[test]
fn ids_are_sequential_from_one() {
    let catalog = CatalogGenerator::seeded(5).generate(&CatalogTables::builtin());
    assert_eq!(catalog.courses()[0].id, "course-1");
    assert_eq!(
        catalog.courses().last().map(|c| c.id.clone()),
        Some(format!("course-{}", catalog.len()))
    );
}

#[test]
fn six_topics_split_evenly_across_two_categories() {
    let catalog =
        CatalogGenerator::seeded(3).generate(&CatalogTables::with_topics(TOPICS, CATEGORIES));

    assert_eq!(catalog.course_count("code"), 3);
    assert_eq!(catalog.course_count("design"), 3);

    let categories: Vec<&str> = catalog.courses().iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, ["code", "code", "code", "design", "design", "design"]);

    let subcategories: Vec<&str> = catalog
        .by_category("design")
        .iter()
        .map(|c| c.subcategory.as_str())
        .collect();
    // Absolute topic indices 3, 4, 5 cycle through [UI, Graphics]
    assert_eq!(subcategories, ["Graphics", "UI", "Graphics"]);

    let levels: Vec<Level> = catalog.courses().iter().map(|c| c.level).collect();
    assert_eq!(levels[..3], Level::ALL);
    assert_eq!(levels[3..], Level::ALL);
}

#[test]
fn stub_tables_leave_pooled_fields_empty() {
    let catalog =
        CatalogGenerator::seeded(3).generate(&CatalogTables::with_topics(TOPICS, CATEGORIES));
    let course = &catalog.courses()[0];
    assert!(course.instructor.is_empty());
    assert!(course.image.is_empty());
    assert_eq!(course.tags, ["Rust", "Basics"]);
}

#[test]
fn empty_tables_give_empty_catalog() {
    let no_topics =
        CatalogGenerator::seeded(1).generate(&CatalogTables::with_topics(&[], CATEGORIES));
    assert!(no_topics.is_empty());
    assert_eq!(no_topics.categories().len(), 2);
    assert!(no_topics.categories().iter().all(|c| c.course_count == 0));
    assert_eq!(no_topics.course_count("code"), 0);

    let no_categories =
        CatalogGenerator::seeded(1).generate(&CatalogTables::with_topics(TOPICS, &[]));
    assert!(no_categories.is_empty());
    assert!(no_categories.categories().is_empty());
}

#[test]
fn featured_respects_limit_and_flag() {
    let catalog = CatalogGenerator::seeded(11).generate(&CatalogTables::builtin());
    let featured = catalog.featured(8);
    assert!(featured.len() <= 8);
    assert!(featured.iter().all(|c| c.featured));
    assert!(catalog.featured(0).is_empty());
}
