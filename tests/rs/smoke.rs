//! Integration smoke tests for `course_catalog`

use course_catalog::catalog::Catalog;
use course_catalog::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn global_catalog_is_populated() {
    let catalog = Catalog::global();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.categories().len(), 7);
}
