//! Tracing subscriber setup for the admin dashboard
//!
//! # Quick Start
//!
//! ```ignore
//! use admin_logging::{DashboardSubscriberBuilder, LogConfig};
//!
//! // Pretty console output, debug level
//! let _guard = DashboardSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .try_init()?;
//! ```
//!
//! `RUST_LOG` always wins over the configured default level.

pub mod config;

pub use config::{
    ConsoleConfig, ConsoleFormat, FileConfig, LOG_FILE_PREFIX, LogConfig, PRODUCTION_RETAINED_FILES,
    RotationStrategy,
};

use std::fs;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry};

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter {directive:?}: {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Log directory error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log file appender error: {0}")]
    Appender(#[from] InitError),

    #[error("Subscriber already installed: {0}")]
    Init(#[from] TryInitError),
}

type Filtered = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Filtered> + Send + Sync>;

/// Builder for configuring and initializing the logging subscriber
pub struct DashboardSubscriberBuilder {
    config: LogConfig,
}

impl DashboardSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Filter from `RUST_LOG`, falling back to the configured level.
    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.config.default_level).map_err(|err| {
                LoggingError::InvalidFilter {
                    directive: self.config.default_level.clone(),
                    reason: err.to_string(),
                }
            }),
        }
    }

    fn file_layer(file: &FileConfig) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
        fs::create_dir_all(&file.directory)?;

        let rotation = match file.rotation {
            RotationStrategy::Daily => Rotation::DAILY,
            RotationStrategy::Hourly => Rotation::HOURLY,
            RotationStrategy::Never => Rotation::NEVER,
        };
        let mut appender = RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(file.prefix.as_str())
            .filename_suffix("log");
        if let Some(max_files) = file.max_files {
            appender = appender.max_log_files(max_files);
        }
        let (writer, guard) = tracing_appender::non_blocking(appender.build(&file.directory)?);

        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
            .boxed();
        Ok((layer, guard))
    }

    /// Install the subscriber globally
    ///
    /// The returned guard flushes file output when dropped, so keep it alive
    /// for the lifetime of the program. Fails if a global subscriber is
    /// already set.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = self.env_filter()?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.config.console.enabled {
            let console = tracing_subscriber::fmt::layer()
                .with_ansi(self.config.console.ansi)
                .with_target(true);
            let layer = match self.config.console.format {
                ConsoleFormat::Pretty => console.pretty().boxed(),
                ConsoleFormat::Compact => console.compact().boxed(),
                ConsoleFormat::Json => console.json().boxed(),
            };
            layers.push(layer);
        }

        let mut guard = None;
        if let Some(file) = &self.config.file {
            let (layer, file_guard) = Self::file_layer(file)?;
            layers.push(layer);
            guard = Some(file_guard);
        }

        Registry::default().with(env_filter).with(layers).try_init()?;

        tracing::debug!(
            level = %self.config.default_level,
            console = self.config.console.enabled,
            file = self.config.file.is_some(),
            "logging initialized"
        );
        Ok(guard)
    }
}

impl Default for DashboardSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize logging for development (verbose, pretty console output)
pub fn init_development() -> Result<Option<WorkerGuard>, LoggingError> {
    DashboardSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .try_init()
}

/// Initialize logging for testing (minimal output); repeated calls are ignored
pub fn init_testing() {
    let _ = DashboardSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = DashboardSubscriberBuilder::new();
        assert_eq!(builder.config().default_level, "info");
    }

    #[test]
    fn test_builder_with_config() {
        let builder = DashboardSubscriberBuilder::new().with_config(LogConfig::development());
        assert_eq!(builder.config().default_level, "debug");
        assert_eq!(builder.config().console.format, ConsoleFormat::Pretty);
    }

    #[test]
    fn test_builder_with_level() {
        let builder = DashboardSubscriberBuilder::new().with_level("trace");
        assert_eq!(builder.config().default_level, "trace");
    }

    #[test]
    fn test_builder_with_console() {
        let builder = DashboardSubscriberBuilder::new().with_console(false);
        assert!(!builder.config().console.enabled);
    }

    #[test]
    fn test_builder_with_file_output() {
        let builder = DashboardSubscriberBuilder::new().with_file_output(FileConfig::default());
        let file = builder.config().file.as_ref().unwrap();
        assert_eq!(file.prefix, "admin-dashboard");
    }
}
