/*
 * Logger configuration
 *
 * Parses the [logging] table of handler_config.toml into a LogConfig:
 * - LogType selects the output (console or file)
 * - LogLevel is the threshold below which entries are dropped
 * - file settings cover the target path, folder, rotation size and flushing
 *
 * Enum values are matched case-insensitively so "Info", "INFO" and "info"
 * are all accepted.
 */

use serde::{Deserialize, Serialize};
use std::fs;

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(serde::de::Error::unknown_variant(
                &s,
                &["debug", "info", "warn", "warning", "error"],
            )),
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Supported output types for logging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LogType {
    Console,
    File,
}

impl<'de> Deserialize<'de> for LogType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "console" => Ok(LogType::Console),
            "file" => Ok(LogType::File),
            _ => Err(serde::de::Error::unknown_variant(&s, &["console", "file"])),
        }
    }
}

/// Configuration for the logger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Type of output (console, file)
    #[serde(rename = "type")]
    pub log_type: LogType,

    /// Minimum log level to record
    pub threshold: LogLevel,

    /// File name for file-based logging
    #[serde(default)]
    pub file_path: Option<String>,

    /// Folder for log files
    #[serde(default)]
    pub log_folder: Option<String>,

    /// Maximum file size before rotation (in MB)
    #[serde(default)]
    pub max_file_size_mb: Option<u64>,

    /// Whether to flush after every write (default: false)
    #[serde(default)]
    pub force_flush: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_type: LogType::Console,
            threshold: LogLevel::Info,
            file_path: None,
            log_folder: None,
            max_file_size_mb: None,
            force_flush: false,
        }
    }
}

/// Wrapper for the [logging] table; other tables in the file are ignored
#[derive(Debug, Deserialize)]
struct ConfigWrapper {
    logging: LogConfig,
}

impl LogConfig {
    /// Create configuration from a TOML file.
    ///
    /// A missing or unreadable file yields the defaults; a file that exists
    /// but cannot be parsed is an error.
    pub fn from_file(file_path: &str) -> Result<Self, String> {
        let config_str = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "Warning: Could not read config file '{}': {}. Using defaults.",
                    file_path, e
                );
                return Ok(LogConfig::default());
            }
        };

        Self::from_toml_str(&config_str)
    }

    /// Parse either a document with a [logging] table or a bare LogConfig
    pub fn from_toml_str(config_str: &str) -> Result<Self, String> {
        match toml::from_str::<ConfigWrapper>(config_str) {
            Ok(wrapper) => Ok(wrapper.logging),
            Err(e) => toml::from_str::<LogConfig>(config_str)
                .map_err(|_| format!("Failed to parse config file: {}", e)),
        }
    }

    /// Full path of the log file, joining `log_folder` and `file_path`
    pub fn resolved_file_path(&self) -> Option<String> {
        let file = self.file_path.as_deref()?;
        match self.log_folder.as_deref() {
            Some(folder) if !folder.is_empty() => Some(
                std::path::Path::new(folder)
                    .join(file)
                    .to_string_lossy()
                    .into_owned(),
            ),
            _ => Some(file.to_string()),
        }
    }
}
