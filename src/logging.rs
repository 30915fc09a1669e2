//! Logging setup with `tracing` and `tracing-subscriber`.
//!
//! The editor owns the terminal while it runs, so log lines never go to the
//! screen: they go to a file when one is configured and are dropped
//! otherwise. The headless `export` subcommand logs to stderr.
//!
//! `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Appended to this file.
    File(PathBuf),
    Stderr,
    /// Nothing is written.
    #[default]
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            target: LogTarget::Discard,
        }
    }
}

impl LogConfig {
    /// Log file when given, otherwise `fallback`.
    pub fn new(level: Level, log_file: Option<PathBuf>, fallback: LogTarget) -> Self {
        let target = log_file.map(LogTarget::File).unwrap_or(fallback);
        Self { level, target }
    }
}

/// Parses a level name such as `debug` or `WARN`.
pub fn parse_level(name: &str) -> Result<Level, String> {
    name.parse::<Level>()
        .map_err(|_| format!("unknown log level '{name}' (expected error, warn, info, debug or trace)"))
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config.level);
    let registry = tracing_subscriber::registry().with(filter);
    let result = match &config.target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .try_init()
        }
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
        LogTarget::Discard => registry.with(fmt::layer().with_writer(io::sink)).try_init(),
    };
    result.map_err(io::Error::other)
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn
        EnvFilter::new(format!("warn,ame={}", level.as_str().to_lowercase()))
    })
}
