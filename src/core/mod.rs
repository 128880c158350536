//! Core module: catalog data, queries and the surfaces built on top of them

pub mod catalog;
pub mod config;
pub mod export;
pub mod models;
pub mod playlist;

/// Returns the current version of the `course-catalog` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
