//! Feature-gated logger used by the library and the `coursecatalog` binary.
//!
//! - `log-info` enables `info!` output.
//! - `log-debug` enables `debug!` output and a runtime debug switch.
//! - `verbose` enables `verbose!`, a plain printer with no level tag.
//! - `file-logging` redirects tagged messages to a file once one is opened.
//!
//! `warn!` and `error!` are always compiled in. `info!` goes to stdout and
//! every other level to stderr.

use std::fmt::{self, Arguments};
use std::str::FromStr;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Logging levels, ordered from least to most chatty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures the user must see.
    Error = 1,
    /// Recoverable problems.
    Warn = 2,
    /// Progress messages (requires `log-info`).
    Info = 3,
    /// Diagnostics (requires `log-debug` and the runtime flag).
    Debug = 4,
}

impl Level {
    /// Tag printed in front of each message
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Whether console output for this level goes to stderr
    #[must_use]
    pub const fn uses_stderr(self) -> bool {
        !matches!(self, Self::Info)
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("Unknown log level: '{s}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level());
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current global log level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::SeqCst))
}

/// Parse and set the level from a string (case-insensitive). Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Enable debug logging at runtime.
pub fn enable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging at runtime.
pub fn disable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether debug logging is enabled (always false without `log-debug`).
#[must_use]
pub fn is_debug_enabled() -> bool {
    #[cfg(feature = "log-debug")]
    {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "log-debug"))]
    {
        false
    }
}

/// Enable verbose output at runtime.
pub fn enable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable verbose output at runtime.
pub fn disable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether verbose output is enabled (always false without `verbose`).
#[must_use]
pub fn is_verbose_enabled() -> bool {
    #[cfg(feature = "verbose")]
    {
        VERBOSE_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "verbose"))]
    {
        false
    }
}

/// Open `path` in append mode and route tagged messages there.
/// Returns false if the file cannot be opened or file logging is compiled out.
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    #[cfg(feature = "file-logging")]
    {
        let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
            return false;
        };
        match LOG_FILE.lock() {
            Ok(mut slot) => {
                *slot = Some(file);
                true
            }
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = path;
        false
    }
}

/// Write `line` to the log file; returns false when no file is open.
fn write_to_file(line: &str) -> bool {
    #[cfg(feature = "file-logging")]
    {
        if let Ok(mut slot) = LOG_FILE.lock() {
            if let Some(file) = slot.as_mut() {
                let _ = writeln!(file, "{line}");
                let _ = file.flush();
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = line;
        false
    }
}

fn should_log(level: Level) -> bool {
    let compiled_in = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    compiled_in && level <= self::level()
}

/// Dispatch used by the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_to_file(&line) {
        return;
    }
    if level.uses_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Logs an error-level message to stderr.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*))
    };
}

/// Logs a warning-level message to stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

/// Logs an info-level message (requires `log-info`).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

/// Logs a debug-level message (requires `log-debug` and the runtime flag).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

/// Prints an untagged line when verbose output is on. Never written to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() {
            println!($($arg)*);
        }
    };
}
