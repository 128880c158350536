//! Configuration module for `coursecatalog`

use crate::core::catalog::{CategoryMode, SortKey, DEFAULT_FEATURED_LIMIT, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$COURSE_CATALOG";

const fn default_featured_limit() -> usize {
    DEFAULT_FEATURED_LIMIT
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Catalog generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// PRNG seed for numeric course fields; empty means unseeded
    #[serde(default)]
    pub seed: String,
    /// Number of featured courses to list
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

/// Catalog listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Courses per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Default sort key (popular, rating, students, newest, alphabetical)
    #[serde(default)]
    pub sort: String,
    /// How a category filter combines with search text (replace, intersect)
    #[serde(default)]
    pub category_mode: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: String::new(),
            category_mode: String::new(),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported catalog files
    #[serde(default)]
    pub exports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Listing settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override generator seed
    pub seed: Option<String>,
    /// Override page size
    pub page_size: Option<usize>,
    /// Override category mode
    pub category_mode: Option<String>,
    /// Override exports directory
    pub exports_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_CATALOG` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursecatalog`
    /// - macOS: `~/Library/Application Support/coursecatalog`
    /// - Windows: `%APPDATA%\coursecatalog`
    #[must_use]
    pub fn get_catalog_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursecatalog")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in. Numeric fields already carry serde defaults.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (field, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.catalog.sort, &defaults.catalog.sort),
            (&mut self.catalog.category_mode, &defaults.catalog.category_mode),
            (&mut self.paths.exports_dir, &defaults.paths.exports_dir),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; the config file is untouched. Only
    /// non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(seed) = &overrides.seed {
            self.generator.seed.clone_from(seed);
        }
        if let Some(page_size) = overrides.page_size {
            self.catalog.page_size = page_size;
        }
        if let Some(mode) = &overrides.category_mode {
            self.catalog.category_mode.clone_from(mode);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_catalog_dir`](Self::get_catalog_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_catalog_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$COURSE_CATALOG` with the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_catalog_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$COURSE_CATALOG` is expanded
    /// in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// An existing file is merged with any newly added default fields and
    /// re-saved. Any read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                match Self::from_toml(&content) {
                    Ok(mut config) => {
                        if config.merge_defaults(&defaults) {
                            let _ = config.save();
                        }
                        return config;
                    }
                    Err(e) => {
                        crate::warn!(
                            "Ignoring unreadable config {}: {e}",
                            config_file.display()
                        );
                    }
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `seed`, `featured_limit`,
    /// `page_size`, `sort`, `category_mode`, `exports_dir` (dashes accepted in
    /// place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "seed" => Some(self.generator.seed.clone()),
            "featured_limit" => Some(self.generator.featured_limit.to_string()),
            "page_size" => Some(self.catalog.page_size.to_string()),
            "sort" => Some(self.catalog.sort.clone()),
            "category_mode" => Some(self.catalog.category_mode.clone()),
            "exports_dir" => Some(self.paths.exports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated: `verbose` must be a boolean, `seed` empty or an
    /// unsigned integer, `featured_limit`/`page_size` unsigned integers,
    /// `category_mode` `replace` or `intersect`. Call [`save()`](Config::save)
    /// to persist.
    ///
    /// # Errors
    /// Returns an error for unknown keys or values that fail validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "seed" => {
                if !value.is_empty() {
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid seed: '{value}'"))?;
                }
                self.generator.seed = value.to_string();
            }
            "featured_limit" => self.generator.featured_limit = parse_count(key, value)?,
            "page_size" => self.catalog.page_size = parse_count(key, value)?,
            "sort" => self.catalog.sort = value.to_string(),
            "category_mode" => {
                value.parse::<CategoryMode>()?;
                self.catalog.category_mode = value.to_string();
            }
            "exports_dir" => self.paths.exports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single value to the one in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "seed" => self.generator.seed.clone_from(&defaults.generator.seed),
            "featured_limit" => self.generator.featured_limit = defaults.generator.featured_limit,
            "page_size" => self.catalog.page_size = defaults.catalog.page_size,
            "sort" => self.catalog.sort.clone_from(&defaults.catalog.sort),
            "category_mode" => self
                .catalog
                .category_mode
                .clone_from(&defaults.catalog.category_mode),
            "exports_dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Generator seed, `None` when empty or unparsable
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.generator.seed.trim().parse().ok()
    }

    /// Default sort key for listings
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.catalog.sort)
    }

    /// Category/search combination rule, `replace` when unset or invalid
    #[must_use]
    pub fn category_mode(&self) -> CategoryMode {
        self.catalog.category_mode.parse().unwrap_or_default()
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[generator]")?;
        writeln!(f, "  seed = \"{}\"", self.generator.seed)?;
        writeln!(f, "  featured_limit = {}", self.generator.featured_limit)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  page_size = {}", self.catalog.page_size)?;
        writeln!(f, "  sort = \"{}\"", self.catalog.sort)?;
        writeln!(f, "  category_mode = \"{}\"", self.catalog.category_mode)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        Ok(())
    }
}
