#![deny(missing_docs)]
//! Shared logging utilities for the rpncalc workspace.
//!
//! This crate provides the `rpn_*` logging macros used across the codebase,
//! logger initialization for consumers of the parser, and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use thiserror::Error;

/// Default log file, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "./rpncalc.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! rpn_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! rpn_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! rpn_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! rpn_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! rpn_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Failure to install the global logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("could not create log file at {path:?}: {source}")]
    LogFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A global logger was already installed.
    #[error("global logger already set: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file.
    File,
    /// Write to terminal (stdout).
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Level and file location used by [`initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Maximum level that is recorded.
    pub level: LevelFilter,
    /// File written for `LogDestination::File` and `LogDestination::Both`.
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Initialize the global logger with the specified destination.
///
/// For `LogDestination::File` or `Both`, creates (truncates) `settings.file`.
/// Fails if the file cannot be created or a logger is already installed.
pub fn initialize(destination: LogDestination, settings: &LogSettings) -> Result<(), LoggingError> {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => vec![create_file_logger(settings, config)?],
        LogDestination::Terminal => vec![TermLogger::new(
            settings.level,
            config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )],
        LogDestination::Both => vec![
            TermLogger::new(
                settings.level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ),
            create_file_logger(settings, config)?,
        ],
    };

    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Trace in debug builds so tokenizer records show up, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    settings: &LogSettings,
    config: Config,
) -> Result<Box<WriteLogger<File>>, LoggingError> {
    let file = File::create(&settings.file).map_err(|source| LoggingError::LogFile {
        path: settings.file.clone(),
        source,
    })?;
    Ok(WriteLogger::new(settings.level, config, file))
}
