use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for a similarity scan
///
/// The comparison itself has no knobs: the histogram bin count, the hash grid
/// and the zero-distance hash criterion are fixed. Everything here concerns how
/// files are found and how results are reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum directory depth for scanning (1 = files directly in the directory)
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links while scanning
    pub follow_links: bool,

    /// Whether to also decode files without a known image extension
    pub process_unsupported_formats: bool,

    /// Whether to append the verdict kind to each reported pair
    pub report_verdict: bool,

    /// Whether to draw a progress bar on stderr
    pub show_progress: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Directory for rolling log files (console logging when unset)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: Some(1),
            follow_links: false,
            process_unsupported_formats: false,
            report_verdict: false,
            show_progress: false,
            log_level: LogLevel::Info,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Depth 0 only yields the directory entry itself
        if self.max_depth == Some(0) {
            return Err(Error::Configuration(
                "Maximum depth must be at least 1".to_string(),
            ));
        }

        if let Some(dir) = &self.log_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Configuration(
                    "Log directory must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
