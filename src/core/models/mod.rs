//! Data models for the course catalog

pub mod category;
pub mod course;

pub use category::Category;
pub use course::{Course, Level};
