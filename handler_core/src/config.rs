/*
 * Adapter configuration
 *
 * Read from the [adapter] table of handler_config.toml, the same file whose
 * [logging] table configures liblogger:
 *
 *   [adapter]
 *   on_panic = "status"     # or "propagate" (default)
 *   panic_status = 500
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HandlerError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "handler_config.toml";

/// What the adapter does when a handler panics. The incoming request is
/// released either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum PanicPolicy {
    /// Let the panic unwind; the exported entry point turns it into an abort.
    #[default]
    Propagate,
    /// Catch the panic and answer with `panic_status`.
    Status,
}

impl<'de> Deserialize<'de> for PanicPolicy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "propagate" | "abort" => Ok(PanicPolicy::Propagate),
            "status" => Ok(PanicPolicy::Status),
            _ => Err(serde::de::Error::unknown_variant(&s, &["propagate", "status"])),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub on_panic: PanicPolicy,

    #[serde(default = "default_panic_status")]
    pub panic_status: u32,
}

fn default_panic_status() -> u32 {
    500
}

impl Default for AdapterConfig {
    fn default() -> Self {
        AdapterConfig {
            on_panic: PanicPolicy::Propagate,
            panic_status: default_panic_status(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigWrapper {
    #[serde(default)]
    adapter: AdapterConfig,
}

impl AdapterConfig {
    /// Load from [`DEFAULT_CONFIG_FILE`] in the working directory.
    pub fn load() -> Result<Self> {
        Self::from_file(DEFAULT_CONFIG_FILE)
    }

    /// A missing file yields the defaults; an unparsable one is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::from_toml_str(&content),
            Err(_) => Ok(AdapterConfig::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str::<ConfigWrapper>(content)
            .map(|wrapper| wrapper.adapter)
            .map_err(|e| HandlerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_when_table_is_missing() {
        let config = AdapterConfig::from_toml_str("[logging]\ntype = \"console\"\n").unwrap();
        assert_eq!(config, AdapterConfig::default());
        assert_eq!(config.panic_status, 500);
    }

    #[test]
    fn parses_status_policy_case_insensitively() {
        let config = AdapterConfig::from_toml_str("[adapter]\non_panic = \"Status\"\npanic_status = 503\n").unwrap();
        assert_eq!(
            config,
            AdapterConfig {
                on_panic: PanicPolicy::Status,
                panic_status: 503,
            }
        );
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = AdapterConfig::from_toml_str("[adapter]\non_panic = \"ignore\"\n").unwrap_err();
        assert!(matches!(err, HandlerError::Config(_)));
    }

    #[test]
    fn reads_file_and_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        assert_eq!(AdapterConfig::from_file(&path).unwrap(), AdapterConfig::default());

        fs::write(&path, "[adapter]\non_panic = \"status\"\n").unwrap();
        let config = AdapterConfig::from_file(&path).unwrap();
        assert_eq!(config.on_panic, PanicPolicy::Status);
        assert_eq!(config.panic_status, 500);
    }
}
