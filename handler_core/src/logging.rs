//! Logger setup for handler libraries
//!
//! Re-exports the `liblogger` macros so handler crates log the same way the
//! adapter does.

pub use liblogger::{log_debug, log_error, log_info, log_warn, LogConfig, LogLevel, Logger};

use crate::config::DEFAULT_CONFIG_FILE;

/// Initialize the logger for a handler library.
///
/// Reads the [logging] table of `handler_config.toml` in the working
/// directory and falls back to console logging when that fails. Meant for
/// the library's load hook, before `register`.
pub fn init_logger(handler_name: &str) -> Result<(), String> {
    match Logger::init_with_config_file(DEFAULT_CONFIG_FILE) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("[{}] Error initializing logger from config: {}", handler_name, e);
            Logger::init_with_config(LogConfig::default())
        }
    }
}
