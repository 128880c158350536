//! Integration tests for logger behavior.

use course_catalog::logger::{set_level, set_level_from_str, Level};
use course_catalog::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    for name in ["error", "warn", "info", "debug", "WARNING"] {
        assert!(set_level_from_str(name), "rejected {name}");
    }
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn levels_are_ordered_by_verbosity() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Info < Level::Debug);
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("generated {} courses", 536);
    warn!("unknown sort key '{}'", "hot");
    error!("export failed");
    debug!("page {} of {}", 1, 23);
    verbose!("verbose line");
}
