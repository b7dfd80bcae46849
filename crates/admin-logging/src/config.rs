//! Logging configuration for the dashboard
//!
//! The desktop app logs to the terminal it was started from while developing,
//! and to rotated JSON files under the user's log directory once installed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name prefix for rotated dashboard logs
pub const LOG_FILE_PREFIX: &str = "admin-dashboard";

/// Rotated files kept by the production preset, two weeks of daily logs
pub const PRODUCTION_RETAINED_FILES: usize = 14;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset, e.g. `info` or
    /// `admin_theme=trace,info`
    pub default_level: String,

    pub console: ConsoleConfig,

    /// Rotated file output; `None` logs to the console only
    pub file: Option<FileConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Human-readable debug output while working on the UI
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                format: ConsoleFormat::Pretty,
                ansi: true,
            },
            file: None,
        }
    }

    /// Installed app: compact console lines plus rotated JSON files in `log_dir`
    pub fn production(log_dir: PathBuf) -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig {
                enabled: true,
                format: ConsoleFormat::Compact,
                ansi: false,
            },
            file: Some(FileConfig {
                directory: log_dir,
                prefix: LOG_FILE_PREFIX.to_string(),
                rotation: RotationStrategy::Daily,
                max_files: Some(PRODUCTION_RETAINED_FILES),
            }),
        }
    }

    /// Warnings only, plain text, for test binaries
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            console: ConsoleConfig {
                enabled: true,
                format: ConsoleFormat::Compact,
                ansi: false,
            },
            file: None,
        }
    }
}

/// Layout of console lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    /// Multi-line, indented fields
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub format: ConsoleFormat,
    /// Colour escape codes; ignored for JSON
    pub ansi: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: ConsoleFormat::Pretty,
            ansi: true,
        }
    }
}

/// Rotated JSON log files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub rotation: RotationStrategy,
    /// Older files beyond this count are deleted on rotation
    pub max_files: Option<usize>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: LOG_FILE_PREFIX.to_string(),
            rotation: RotationStrategy::Daily,
            max_files: Some(PRODUCTION_RETAINED_FILES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    #[default]
    Daily,
    Hourly,
    /// One file, appended to for the life of the install
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(config.console.enabled);
        assert_eq!(config.console.format, ConsoleFormat::Pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.default_level, "debug");
        assert_eq!(config.console.format, ConsoleFormat::Pretty);
        assert!(config.console.ansi);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_production_keeps_two_weeks_of_daily_files() {
        let config = LogConfig::production(PathBuf::from("/var/log/admin-dashboard"));
        assert_eq!(config.console.format, ConsoleFormat::Compact);
        let file = config.file.expect("production writes to file");
        assert_eq!(file.directory, PathBuf::from("/var/log/admin-dashboard"));
        assert_eq!(file.prefix, "admin-dashboard");
        assert_eq!(file.rotation, RotationStrategy::Daily);
        assert_eq!(file.max_files, Some(14));
    }

    #[test]
    fn test_testing_config() {
        let config = LogConfig::testing();
        assert_eq!(config.default_level, "warn");
        assert!(!config.console.ansi);
    }
}
