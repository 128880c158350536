//! Integration tests for search, filtering, sorting and pagination

use course_catalog::catalog::{
    Catalog, CatalogGenerator, CatalogTables, CategoryMode, QueryParams, SortKey, ALL,
};
use course_catalog::models::{Category, Course, Level};

fn course(id: &str, title: &str, category: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Learn {title}"),
        image: String::new(),
        category: category.to_string(),
        subcategory: "General".to_string(),
        level: Level::Beginner,
        duration: "6 weeks".to_string(),
        students: "50K".to_string(),
        rating: 4.0,
        reviews: 1_000,
        instructor: "Alex Turner".to_string(),
        instructor_image: String::new(),
        tags: title.split_whitespace().map(str::to_string).collect(),
        lessons: 20,
        projects: 3,
        certificates: true,
        featured: false,
    }
}

fn category(id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        icon: String::new(),
        color: String::new(),
        subcategories: vec!["General".to_string()],
        course_count: 0,
    }
}

fn builtin() -> Catalog {
    CatalogGenerator::seeded(2024).generate(&CatalogTables::builtin())
}

#[test]
fn empty_search_returns_everything_in_order() {
    let catalog = builtin();
    let all = catalog.search("");
    assert_eq!(all.len(), catalog.len());
    assert!(all.iter().zip(catalog.courses()).all(|(a, b)| a.id == b.id));
}

#[test]
fn search_is_case_insensitive() {
    let catalog = builtin();
    let ids = |query: &str| -> Vec<String> {
        catalog.search(query).iter().map(|c| c.id.clone()).collect()
    };

    let lower = ids("python");
    assert!(!lower.is_empty());
    assert_eq!(lower, ids("PYTHON"));
    assert_eq!(lower, ids("PyThOn"));
    assert!(catalog.search("python").iter().all(|c| c.matches("python")));
}

#[test]
fn search_matches_instructor_case_insensitively() {
    let mut taught = course("course-1", "Go Services", "code");
    taught.instructor = "Priya Raman".to_string();
    let other = course("course-2", "Rust Systems", "code");
    let catalog = Catalog::new(vec![taught, other], vec![category("code")]);

    for query in ["priya raman", "PRIYA RAMAN", "pRiYa"] {
        let found: Vec<&str> = catalog.search(query).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(found, ["course-1"], "query {query:?}");
    }
}

#[test]
fn unknown_lookups_are_empty() {
    let catalog = builtin();
    assert!(catalog.by_category("underwater-basket-weaving").is_empty());
    assert!(catalog.find_by_id("course-0").is_none());
    assert!(catalog.find_by_id("course-1").is_some());
}

#[test]
fn pages_concatenate_to_full_result() {
    let catalog = builtin();
    let base = QueryParams::default().sort(SortKey::Rating);
    let expected: Vec<&str> = catalog.filtered(&base).iter().map(|c| c.id.as_str()).collect();

    let first = catalog.query(&base.clone().page(1, 24));
    let mut collected = Vec::new();
    for page_number in 1..=first.total_pages {
        let page = catalog.query(&base.clone().page(page_number, 24));
        assert_eq!(page.total_count, catalog.len());
        collected.extend(page.items.iter().map(|c| c.id.as_str()));
    }

    assert_eq!(collected, expected);
    assert_eq!(first.total_pages, catalog.len().div_ceil(24));
    assert!(first.has_next());
    assert!(!first.has_previous());
}

#[test]
fn rating_sort_is_non_increasing() {
    let catalog = builtin();
    let sorted = catalog.filtered(&QueryParams::default().sort(SortKey::Rating));
    assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));
}

#[test]
fn popular_sort_orders_by_reviews() {
    let catalog = builtin();
    let sorted = catalog.filtered(&QueryParams::default());
    assert!(sorted.windows(2).all(|w| w[0].reviews >= w[1].reviews));
}

#[test]
fn alphabetical_first_page_of_two() {
    let titles = ["Cherry", "Apple", "Elderberry", "Banana", "Date"];
    let courses = titles
        .iter()
        .enumerate()
        .map(|(i, title)| course(&format!("course-{}", i + 1), title, "fruit"))
        .collect();
    let catalog = Catalog::new(courses, vec![category("fruit")]);

    let page = catalog.query(
        &QueryParams::default()
            .sort(SortKey::Alphabetical)
            .page(1, 2),
    );
    let names: Vec<&str> = page.items.iter().map(|c| c.title.as_str()).collect();

    assert_eq!(names, ["Apple", "Banana"]);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 3);

    let last = catalog.query(
        &QueryParams::default()
            .sort(SortKey::Alphabetical)
            .page(3, 2),
    );
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].title, "Elderberry");
    assert!(!last.has_next());
}

#[test]
fn students_sort_compares_numerically() {
    let mut small = course("course-1", "Small", "x");
    small.students = "20K".to_string();
    let mut large = course("course-2", "Large", "x");
    large.students = "150K".to_string();
    let catalog = Catalog::new(vec![small, large], vec![category("x")]);

    let sorted = catalog.filtered(&QueryParams::default().sort(SortKey::Students));
    assert_eq!(sorted[0].students, "150K");
    assert_eq!(sorted[1].students, "20K");
}

#[test]
fn newest_sort_compares_ids_as_strings() {
    let catalog = Catalog::new(
        vec![
            course("course-10", "Ten", "x"),
            course("course-9", "Nine", "x"),
        ],
        vec![category("x")],
    );
    let sorted = catalog.filtered(&QueryParams::default().sort(SortKey::Newest));
    assert_eq!(sorted[0].id, "course-9");
    assert_eq!(sorted[1].id, "course-10");
}

#[test]
fn category_replaces_search_by_default() {
    let catalog = Catalog::new(
        vec![
            course("course-1", "Rust Systems", "code"),
            course("course-2", "Go Services", "code"),
            course("course-3", "Rust Logos", "design"),
        ],
        vec![category("code"), category("design")],
    );

    let replace = catalog.filtered(&QueryParams::default().search("rust").category("code"));
    assert_eq!(replace.len(), 2);

    let intersect = catalog.filtered(
        &QueryParams::default()
            .search("rust")
            .category("code")
            .category_mode(CategoryMode::Intersect),
    );
    assert_eq!(intersect.len(), 1);
    assert_eq!(intersect[0].id, "course-1");
}

#[test]
fn all_sentinel_disables_filters() {
    let catalog = builtin();
    let everything = catalog.filtered(
        &QueryParams::default()
            .category(ALL)
            .subcategory(ALL)
            .level(ALL),
    );
    assert_eq!(everything.len(), catalog.len());
}

#[test]
fn level_and_subcategory_narrow_results() {
    let catalog = builtin();
    let params = QueryParams::default()
        .category("programming")
        .subcategory("DevOps")
        .level("Advanced");
    let matches = catalog.filtered(&params);

    assert!(!matches.is_empty());
    assert!(matches.iter().all(|c| c.category == "programming"
        && c.subcategory == "DevOps"
        && c.level == Level::Advanced));
    assert!(catalog.filtered(&QueryParams::default().level("advanced")).is_empty());
}

#[test]
fn degenerate_pages_are_empty() {
    let catalog = builtin();
    let total = catalog.len();

    let zero = catalog.query(&QueryParams::default().page(0, 24));
    assert!(zero.items.is_empty());
    assert_eq!(zero.total_count, total);

    let no_size = catalog.query(&QueryParams::default().page(1, 0));
    assert!(no_size.items.is_empty());
    assert_eq!(no_size.total_pages, 0);

    let past_end = catalog.query(&QueryParams::default().page(10_000, 24));
    assert!(past_end.items.is_empty());

    let overflow = catalog.query(&QueryParams::default().page(usize::MAX, usize::MAX));
    assert!(overflow.items.is_empty());
}

#[test]
fn no_matches_gives_zero_pages() {
    let catalog = builtin();
    let page = catalog.query(&QueryParams::default().search("zzzz-not-a-course"));
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert!(!page.has_next());
}
