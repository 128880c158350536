//! Shared library for `coursecatalog`
//! Contains the catalog generator, the query engine and the supporting
//! configuration, export and playlist modules used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::*;
