use log::{error, info, LevelFilter};
use std::path::{Path, PathBuf};

// For file-based logging with rotation
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::{Error, Result};
use crate::types::MatchRecord;

/// Environment variable that overrides the file log level
pub const LOG_ENV_VAR: &str = "IMAGE_SIMILARITY_LOG";

/// Path of the active log file inside `log_dir`
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join("similarity.log")
}

/// Initialize the rolling file logger
/// Logs go to file only so they never mix with the match lines on stdout
pub fn init_logger(log_dir: &Path, level: LevelFilter) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_file_path(log_dir);
    let archived_logs_pattern = log_dir.join("similarity.{}.log");

    // Rotate at 10MB, keep 5 archived log files
    let file_trigger = SizeTrigger::new(10 * 1024 * 1024);
    let file_roller = FixedWindowRoller::builder()
        .build(&archived_logs_pattern.to_string_lossy(), 5)
        .map_err(|e| Error::Configuration(format!("Failed to create log roller: {}", e)))?;

    let compound_policy = CompoundPolicy::new(Box::new(file_trigger), Box::new(file_roller));

    let rolling_file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] [{M}:{L}] - {m}{n}",
        )))
        .build(&log_file_path, Box::new(compound_policy))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(rolling_file)))
        .build(Root::builder().appender("file").build(LevelFilter::Trace))
        .map_err(|e| Error::Configuration(format!("Failed to build log config: {}", e)))?;

    log4rs::init_config(config)
        .map_err(|e| Error::Configuration(format!("Failed to initialize log4rs: {}", e)))?;

    // Environment variable wins over the configured level
    let max_level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(level);
    log::set_max_level(max_level);

    info!("Image similarity scan started");
    info!("Logging to file: {}", log_file_path.display());
    Ok(())
}

/// Log an image that could not be loaded
pub fn log_decode_error(path: &Path, error: &dyn std::error::Error) {
    error!(
        "Image decode failed - Path: {}, Error: {}",
        path.display(),
        error
    );
}

/// Log a reported match
pub fn log_match(record: &MatchRecord) {
    info!(
        "MATCH - {} <-> {}, Verdict: {}",
        record.first, record.second, record.verdict
    );
}
