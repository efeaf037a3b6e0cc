//! Logging configuration.
//!
//! A node logs to two sinks with independent levels: the terminal and a
//! rotating log file under a configurable directory. Both sinks are
//! `tracing-subscriber` fmt layers with a per-layer level filter; the file
//! sink writes through a `tracing-appender` rolling appender. When
//! `RUST_LOG` is set it is applied on top as a global [`EnvFilter`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{Level, Span, Subscriber};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    prelude::*,
    registry::LookupSpan,
    EnvFilter, Layer, Registry,
};

/// File name prefix of the log files when [`LogConfig::name`] is unset.
pub const DEFAULT_LOG_NAME: &str = "main";

/// Log directory relative to `$HOME` when no directory is configured.
pub const DEFAULT_LOG_DIRECTORY: &str = ".snow/logs";

/// Number of rotated log files kept by default.
pub const DEFAULT_ROTATION_SIZE: usize = 7;

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level - very verbose.
    Trace,
    /// Debug level - debug information.
    Debug,
    /// Info level - general information.
    #[default]
    Info,
    /// Warn level - warnings.
    Warn,
    /// Error level - errors only.
    Error,
}

impl LogLevel {
    /// Converts to a tracing Level.
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        level.to_tracing_level()
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from_level(level.to_tracing_level())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// How often the log file is rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationInterval {
    Minutely,
    Hourly,
    #[default]
    Daily,
    /// A single file that is never rolled.
    Never,
}

impl From<RotationInterval> for Rotation {
    fn from(interval: RotationInterval) -> Self {
        match interval {
            RotationInterval::Minutely => Rotation::MINUTELY,
            RotationInterval::Hourly => Rotation::HOURLY,
            RotationInterval::Daily => Rotation::DAILY,
            RotationInterval::Never => Rotation::NEVER,
        }
    }
}

/// Errors raised while installing the logger.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log directory could not be created.
    #[error("failed to create log directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rolling appender could not open its file.
    #[error("failed to open log file in {}: {source}", .path.display())]
    Appender {
        path: PathBuf,
        #[source]
        source: InitError,
    },

    /// Another global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level written to the log file.
    pub log_level: LogLevel,
    /// Minimum level written to the terminal.
    pub display_level: LogLevel,
    /// Directory holding the log files. No file is written when unset.
    pub directory: Option<PathBuf>,
    /// File name prefix of the log files.
    pub name: Option<String>,
    /// Prefix attached to every event logged inside [`LogConfig::context_span`].
    pub msg_prefix: Option<String>,
    pub rotation_interval: RotationInterval,
    /// Number of rolled files kept on disk. Zero keeps every file.
    pub rotation_size: usize,
    /// Disables the log file.
    pub disable_logging: bool,
    /// Disables terminal output.
    pub disable_displaying: bool,
    /// Whether to include target (module path).
    pub target: bool,
    /// Whether to include file and line numbers.
    pub file_line: bool,
    /// Whether to output in JSON format.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            display_level: LogLevel::Info,
            directory: std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(DEFAULT_LOG_DIRECTORY)),
            name: None,
            msg_prefix: None,
            rotation_interval: RotationInterval::Daily,
            rotation_size: DEFAULT_ROTATION_SIZE,
            disable_logging: false,
            disable_displaying: false,
            target: true,
            file_line: false,
            json: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    #[must_use]
    pub const fn with_display_level(mut self, level: LogLevel) -> Self {
        self.display_level = level;
        self
    }

    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_msg_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.msg_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn with_rotation(mut self, interval: RotationInterval, size: usize) -> Self {
        self.rotation_interval = interval;
        self.rotation_size = size;
        self
    }

    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.disable_logging = !enabled;
        self
    }

    #[must_use]
    pub const fn with_displaying(mut self, enabled: bool) -> Self {
        self.disable_displaying = !enabled;
        self
    }

    #[must_use]
    pub const fn with_file_line(mut self, enabled: bool) -> Self {
        self.file_line = enabled;
        self
    }

    #[must_use]
    pub const fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Directory the log files go to, or `None` if file logging is off.
    #[must_use]
    pub fn log_directory(&self) -> Option<&Path> {
        if self.disable_logging {
            return None;
        }
        self.directory.as_deref()
    }

    /// Returns a span carrying [`LogConfig::msg_prefix`] as its `prefix` field.
    ///
    /// Events recorded while the span is entered are printed with the prefix
    /// by both sinks. Without a prefix the span is disabled.
    #[must_use]
    pub fn context_span(&self) -> Span {
        match &self.msg_prefix {
            // Error level so that no sink filters the context out.
            Some(prefix) => tracing::error_span!("ctx", prefix = %prefix),
            None => Span::none(),
        }
    }

    fn rolling_appender(&self, dir: &Path) -> Result<RollingFileAppender, LogError> {
        fs::create_dir_all(dir).map_err(|source| LogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut builder = RollingFileAppender::builder()
            .rotation(self.rotation_interval.into())
            .filename_prefix(self.name.as_deref().unwrap_or(DEFAULT_LOG_NAME))
            .filename_suffix("log");
        if self.rotation_size > 0 {
            builder = builder.max_log_files(self.rotation_size);
        }
        builder.build(dir).map_err(|source| LogError::Appender {
            path: dir.to_path_buf(),
            source,
        })
    }
}

fn fmt_layer<S, W>(
    config: &LogConfig,
    writer: W,
    ansi: bool,
    level: LogLevel,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer::<S>()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(config.target)
        .with_file(config.file_line)
        .with_line_number(config.file_line);
    let filter = LevelFilter::from(level);

    if config.json {
        layer.json().with_filter(filter).boxed()
    } else {
        layer.with_filter(filter).boxed()
    }
}

/// Builds the subscriber described by `config` without installing it.
///
/// # Errors
///
/// Returns [`LogError::Io`] or [`LogError::Appender`] if the log directory
/// or file cannot be created.
pub fn build(config: &LogConfig) -> Result<impl Subscriber + Send + Sync, LogError> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if !config.disable_displaying {
        layers.push(fmt_layer(config, std::io::stdout, true, config.display_level));
    }

    if let Some(dir) = config.log_directory() {
        let appender = config.rolling_appender(dir)?;
        layers.push(fmt_layer(config, appender, false, config.log_level));
    }

    Ok(tracing_subscriber::registry()
        .with(layers)
        .with(EnvFilter::try_from_default_env().ok()))
}

/// Installs the subscriber described by `config` as the global default.
///
/// This should be called once at the start of the application.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<(), LogError> {
    let subscriber = build(config)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Tries to initialize logging, ignoring errors if already initialized.
///
/// This is useful in tests where multiple tests might try to initialize logging.
///
/// # Errors
///
/// Still fails if the log directory or file cannot be created.
pub fn try_init(config: &LogConfig) -> Result<(), LogError> {
    match init(config) {
        Err(LogError::AlreadyInitialized(_)) => Ok(()),
        other => other,
    }
}
