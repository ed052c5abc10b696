//! Bridge configuration.
//!
//! Loaded from a YAML document in which every key is optional:
//!
//! ```yaml
//! log_level: debug
//! log_format: json
//! pretty_json: false
//! ```
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_level: String,
    pub log_format: LogFormat,
    /// Indent encoded API values, for debugging the plugin channel
    pub pretty_json: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            pretty_json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl BridgeConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse bridge configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bridge configuration from {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("Invalid bridge configuration in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_empty() {
        let config = BridgeConfig::from_yaml_str("").unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = BridgeConfig::from_yaml_str("log_format: json\n").unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = BridgeConfig::from_yaml_str("log_format: xml\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level: \"terminal_bridge=debug\"").unwrap();
        writeln!(file, "pretty_json: true").unwrap();

        let config = BridgeConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "terminal_bridge=debug");
        assert!(config.pretty_json);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let error = BridgeConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", error).contains("missing.yaml"));
    }
}
