#![deny(unsafe_code)]

//! Configuration loading and validation for `xperm`.
//!
//! Loads an optional TOML file into [`AppConfig`]. Every section has
//! defaults, so an empty file (or no file at all) is a valid configuration.
//! Command-line flags override what is loaded here.
//!
//! ## TOML Example
//!
//! ```toml
//! [wordlist]
//! path = "/usr/share/dict/words"
//!
//! [logging]
//! level = "info"
//!
//! [output]
//! format = "json"
//! show_count = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Word list configuration.
    #[serde(default)]
    pub wordlist: WordListConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output rendering configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which word list to index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListConfig {
    /// Path to a whitespace-separated word list.
    #[serde(default = "default_wordlist_path")]
    pub path: PathBuf,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            path: default_wordlist_path(),
        }
    }
}

fn default_wordlist_path() -> PathBuf {
    PathBuf::from("./words.txt")
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "warn", "info", "debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Output format for reports written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single pretty-printed JSON array.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the per-query match count in text mode.
    #[serde(default = "default_show_count")]
    pub show_count: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_count: default_show_count(),
        }
    }
}

fn default_show_count() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wordlist.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "wordlist.path must not be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                valid_levels, self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.wordlist.path, PathBuf::from("./words.txt"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_count);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.wordlist.path, PathBuf::from("./words.txt"));
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [wordlist]
            path = "/usr/share/dict/words"

            [logging]
            level = "debug"

            [output]
            format = "json"
            show_count = false
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.wordlist.path, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_count);
    }

    #[test]
    fn test_validation_rejects_empty_wordlist_path() {
        let toml = r#"
            [wordlist]
            path = ""
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: wordlist.path must not be empty"
        );
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let toml = r#"
            [logging]
            level = "loud"
        "#;
        let result = AppConfig::parse(toml);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_off_level() {
        let toml = r#"
            [logging]
            level = "off"
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("\"off\""));
    }

    #[test]
    fn test_validation_accepts_every_level() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let toml = format!("[logging]\nlevel = {level:?}\n");
            let config = AppConfig::parse(&toml).unwrap();
            assert_eq!(config.logging.level, level);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let toml = r#"
            [output]
            format = "xml"
        "#;
        let result = AppConfig::parse(toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::parse(&text).unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Json);
    }

    // ── File-based loading ────────────────────────────────────────────

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("xperm.toml");
        std::fs::write(&path, b"[wordlist]\npath = \"names.txt\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.wordlist.path, PathBuf::from("names.txt"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = AppConfig::load(Path::new("/nonexistent/xperm.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, b"not valid toml [[[").unwrap();

        let result = AppConfig::load(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bad value".to_string());
        assert_eq!(err.to_string(), "validation error: bad value");
    }
}
