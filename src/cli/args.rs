//! CLI argument definitions for `coursecatalog`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_catalog::catalog::{CategoryMode, QueryParams, SortKey};
use course_catalog::config::{Config, ConfigOverrides};
use course_catalog::logger::Level;
use course_catalog::models::Level as CourseLevel;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

/// How listing commands print their results
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Filters shared by `courses` and `export`
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Free-text search over title, description, tags, instructor and subcategory
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Category id (e.g., `programming`), or `all`
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Subcategory name (e.g., `DevOps`), or `all`
    #[arg(long, value_name = "NAME")]
    pub subcategory: Option<String>,

    /// Level: Beginner, Intermediate, Advanced, or `all`
    #[arg(short, long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// Sort key: popular, rating, students, newest, alphabetical (defaults to config)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Apply search text and category together instead of letting the category win
    #[arg(long)]
    pub intersect: bool,
}

impl FilterArgs {
    /// Build query parameters, falling back to config for sort and category mode
    pub fn to_params(&self, config: &Config) -> QueryParams {
        QueryParams {
            search_text: self.search.clone(),
            category_id: self.category.clone(),
            subcategory: self.subcategory.clone(),
            level: self.level.as_deref().map(canonical_level),
            sort: self
                .sort
                .as_deref()
                .map_or_else(|| config.sort_key(), SortKey::parse),
            category_mode: if self.intersect {
                CategoryMode::Intersect
            } else {
                config.category_mode()
            },
            page_number: 1,
            page_size: config.catalog.page_size,
        }
    }
}

/// Accept `beginner`/`BEGINNER` for `Beginner`; leave `all` and unknown names as typed
fn canonical_level(name: &str) -> String {
    name.parse::<CourseLevel>()
        .map_or_else(|_| name.to_string(), |level| level.as_str().to_string())
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `page_size`, `seed`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List courses with search, filters, sorting and pagination.
    Courses {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Courses per page (defaults to config `page_size`)
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show one course by id.
    Show {
        /// Course id (e.g., `course-42`)
        #[arg(value_name = "ID")]
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List categories with course counts and subcategories.
    Categories {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List featured courses.
    Featured {
        /// Maximum number of courses (defaults to config `featured_limit`)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print catalog statistics.
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Export every course matching the filters to a file.
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Export format: csv, json, or html
        #[arg(short, long, value_name = "FORMAT", default_value = "csv")]
        format: String,

        /// Output file path (defaults to `catalog.<ext>` in config `exports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List video playlists, or show one by slug.
    Playlist {
        /// Playlist slug (e.g., `go`)
        #[arg(value_name = "SLUG")]
        slug: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursecatalog",
    about = "Course catalog command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Seed for generated ratings, reviews and enrollment (runtime only)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config page size
    #[arg(long = "config-page-size", value_name = "N")]
    pub config_page_size: Option<usize>,

    /// Override config category mode (replace|intersect)
    #[arg(long = "config-category-mode", value_name = "MODE")]
    pub config_category_mode: Option<String>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--exports-dir`) take precedence over long-form
    /// flags (e.g., `--config-exports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            seed: self.seed.map(|s| s.to_string()),
            page_size: self.config_page_size,
            category_mode: self.config_category_mode.clone(),
            exports_dir: self
                .exports_dir
                .as_ref()
                .or(self.config_exports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
