//! Logging Configuration and Initialization
//!
//! Centralized `tracing` setup for every BioSheet binary. It supports:
//!
//! - Console output (always stderr, so exported data on stdout stays clean)
//! - Daily rotated log files
//! - Text or JSON formatting
//! - Environment-based overrides
//!
//! Use the structured macros (`debug!`, `info!`, `warn!`, `error!`) with
//! fields rather than interpolating values into the message:
//!
//! ```rust,ignore
//! warn!(service = "uniprot", query = %query, error = %err, "Lookup failed");
//! ```
//!
//! # Example
//!
//! ```no_run
//! use biosheet_common::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig::builder().level(LogLevel::Debug).build();
//! init_logging(&config).unwrap();
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log level for filtering messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert to tracing Level
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(anyhow::anyhow!("Invalid log level: {}", s)),
        }
    }
}

/// Output target for logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Console,
    File,
    Both,
}

impl LogOutput {
    fn console(self) -> bool {
        matches!(self, LogOutput::Console | LogOutput::Both)
    }

    fn file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::Both)
    }
}

impl std::str::FromStr for LogOutput {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "stderr" => Ok(LogOutput::Console),
            "file" => Ok(LogOutput::File),
            "both" | "all" => Ok(LogOutput::Both),
            _ => Err(anyhow::anyhow!("Invalid log output: {}", s)),
        }
    }
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum log level to display
    pub level: LogLevel,

    /// Output target (console, file, or both)
    pub output: LogOutput,

    /// Log format (text or JSON)
    pub format: LogFormat,

    /// Directory for log files (only used when output includes file)
    pub log_dir: PathBuf,

    /// Log file name prefix (e.g. "biosheet" -> "biosheet.2026-01-18")
    pub log_file_prefix: String,

    /// Extra filter directives such as "reqwest=warn,biosheet_ingest=debug"
    pub filter_directives: Option<String>,

    /// Whether to include target module names in logs
    pub include_targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            output: LogOutput::Console,
            format: LogFormat::Text,
            log_dir: PathBuf::from("./logs"),
            log_file_prefix: "biosheet".to_string(),
            filter_directives: None,
            include_targets: true,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// Environment variables:
    /// - `BIOSHEET_LOG_LEVEL`: trace, debug, info, warn, error
    /// - `BIOSHEET_LOG_OUTPUT`: console, file, both
    /// - `BIOSHEET_LOG_FORMAT`: text, json
    /// - `BIOSHEET_LOG_DIR`: directory for log files
    /// - `BIOSHEET_LOG_FILTER`: additional filter directives
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(level) = std::env::var("BIOSHEET_LOG_LEVEL") {
            self.level = level.parse()?;
        }

        if let Ok(output) = std::env::var("BIOSHEET_LOG_OUTPUT") {
            self.output = output.parse()?;
        }

        if let Ok(format) = std::env::var("BIOSHEET_LOG_FORMAT") {
            self.format = format.parse()?;
        }

        if let Ok(dir) = std::env::var("BIOSHEET_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }

        if let Ok(filter) = std::env::var("BIOSHEET_LOG_FILTER") {
            self.filter_directives = Some(filter);
        }

        Ok(self)
    }

    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }
}

/// Builder for LogConfig
#[derive(Default)]
pub struct LogConfigBuilder {
    config: LogConfig,
}

impl LogConfigBuilder {
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    pub fn output(mut self, output: LogOutput) -> Self {
        self.config.output = output;
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = dir.into();
        self
    }

    pub fn log_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.log_file_prefix = prefix.into();
        self
    }

    pub fn filter_directives(mut self, filter: impl Into<String>) -> Self {
        self.config.filter_directives = Some(filter.into());
        self
    }

    pub fn include_targets(mut self, include: bool) -> Self {
        self.config.include_targets = include;
        self
    }

    pub fn build(self) -> LogConfig {
        self.config
    }
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Initialize the global subscriber.
///
/// Call once at startup. A second call returns an error from `try_init`.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let mut filter =
        EnvFilter::from_default_env().add_directive(config.level.to_tracing_level().into());

    if let Some(ref directives) = config.filter_directives {
        for directive in directives.split(',').filter(|d| !d.trim().is_empty()) {
            filter = filter.add_directive(
                directive
                    .trim()
                    .parse()
                    .context("Failed to parse filter directive")?,
            );
        }
    }

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.output.console() {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_targets);
        layers.push(match config.format {
            LogFormat::Text => layer.boxed(),
            LogFormat::Json => layer.json().boxed(),
        });
    }

    if config.output.file() {
        std::fs::create_dir_all(&config.log_dir).context("Failed to create log directory")?;
        let appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_prefix);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        // The guard flushes on drop; the subscriber lives for the whole process.
        std::mem::forget(guard);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(config.include_targets)
            .with_ansi(false);
        layers.push(match config.format {
            LogFormat::Text => layer.boxed(),
            LogFormat::Json => layer.json().boxed(),
        });
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(())
}
