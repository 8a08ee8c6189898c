//! Logging setup for the BIP-39 toolkit.
//!
//! Library code only emits `tracing` events; this module installs a
//! subscriber for the command-line tool. Events go to stderr so that command
//! output on stdout stays clean for piping, with an optional daily-rolling log
//! file.
//!
//! Events never carry entropy, checksums or words; only sizes, counts and
//! classifications are logged.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bip39_tools::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::from_env().with_format(LogFormat::Compact);
//! init_logging(&config);
//! ```
//!
//! # Environment
//!
//! - `BIP39_LOG_FORMAT`: `text`, `json` or `compact`
//! - `BIP39_LOG_DIR`: write a log file to this directory as well
//! - `BIP39_DEBUG` / `BIP39_TRACE`: raise the level (any value)
//! - `RUST_LOG`: standard filter directives, takes precedence when set

pub mod format;

use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::error::Error;

pub use format::{CompactFormatter, TextFormatter};

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "~/.bip39tools/logs";

/// File name prefix for the rolling log file.
const LOG_FILE_PREFIX: &str = "bip39tools.log";

static INIT: Once = Once::new();

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file writer flushing for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS | LEVEL | target | message`
    #[default]
    Text,
    /// Newline-delimited JSON
    Json,
    /// `[LEVEL] message`
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(Error::config(format!(
                "invalid log format '{}', expected text, json or compact",
                s
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level DEBUG
    pub debug: bool,
    /// Minimum level TRACE (overrides `debug`)
    pub trace: bool,
    /// Also write to a daily-rolling file in `logging_dir`
    pub record_log: bool,
    /// Directory for log files; a leading `~/` is expanded
    pub logging_dir: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            record_log: false,
            logging_dir: DEFAULT_LOG_DIR.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.record_log = enabled;
        self
    }

    pub fn with_logging_dir(mut self, dir: impl Into<String>) -> Self {
        self.logging_dir = dir.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Defaults overridden by the `BIP39_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Apply `BIP39_*` environment overrides on top of `self`.
    pub fn apply_env(mut self) -> Self {
        if std::env::var_os("BIP39_DEBUG").is_some() {
            self.debug = true;
        }
        if std::env::var_os("BIP39_TRACE").is_some() {
            self.debug = true;
            self.trace = true;
        }
        if let Some(format) = std::env::var("BIP39_LOG_FORMAT")
            .ok()
            .and_then(|f| f.parse().ok())
        {
            self.format = format;
        }
        if let Ok(dir) = std::env::var("BIP39_LOG_DIR") {
            self.logging_dir = dir;
            self.record_log = true;
        }
        self
    }

    fn level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.debug {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    fn expand_dir(&self) -> PathBuf {
        let path = &self.logging_dir;
        if let Some(stripped) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(path)
    }

    fn layer<W>(&self, writer: W, ansi: bool) -> BoxedLayer
    where
        W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
        match self.format {
            LogFormat::Text => layer.event_format(TextFormatter).boxed(),
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Compact => layer.event_format(CompactFormatter).boxed(),
        }
    }
}

/// Install the global subscriber.
///
/// Only the first call has any effect. If another subscriber is already
/// installed it is left in place.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        if install(config) {
            INITIALIZED.store(true, Ordering::SeqCst);
        }
    });
}

/// Install the global subscriber with defaults (WARN level, text format).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Whether [`init_logging`] installed the global subscriber.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

fn install(config: &LoggingConfig) -> bool {
    let env_filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.level().as_str())
    };

    let mut layers: Vec<BoxedLayer> = vec![config.layer(io::stderr, true)];

    if config.record_log {
        let dir = config.expand_dir();
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                layers.push(config.layer(writer, false));
            }
            Err(e) => eprintln!("Warning: failed to create log directory {:?}: {}", dir, e),
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .is_ok()
}
