//! Logger setup for hosts embedding the page runtime.
//!
//! The `logging` section of the page config picks terminal output, a log
//! file, or both. The file defaults to `./xshare.log`.

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    #[default]
    Terminal,
    File,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub destination: LogDestination,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::Terminal,
            level: "info".to_string(),
            file: PathBuf::from("./xshare.log"),
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.level.trim()).unwrap_or(LevelFilter::Info)
    }
}

/// Installs the global logger. Returns false if one was already installed
/// or no destination could be opened.
pub fn initialize(config: &LoggingConfig) -> bool {
    let level = config.level_filter();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(config.destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            logger_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(config.destination, LogDestination::File | LogDestination::Both) {
        match File::create(&config.file) {
            Ok(file) => loggers.push(WriteLogger::new(level, logger_config(), file)),
            Err(err) => eprintln!("Warning: could not create log file {:?}: {}", config.file, err),
        }
    }

    !loggers.is_empty() && CombinedLogger::init(loggers).is_ok()
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
