//! Logging setup for the vk-post binary
//!
//! All output goes to stderr so stdout only carries post results.
//!
//! # Examples
//!
//! ```no_run
//! use libvkpost::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init();
//!
//! // Or read VKPOST_LOG_FORMAT / VKPOST_LOG_LEVEL
//! libvkpost::logging::init_from_env(false);
//! ```

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Settings for the global tracing subscriber
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
}

impl LoggingConfig {
    /// `verbose` raises the level to `debug` regardless of `level`.
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set
    ///
    /// HTTP stack internals stay at `warn` so debug output is about our requests.
    pub fn directive(&self) -> String {
        let level = if self.verbose { "debug" } else { self.level.as_str() };
        format!("{level},hyper=warn,hyper_util=warn,reqwest=warn")
    }

    /// Directive the subscriber is built from, given the value of `RUST_LOG`
    ///
    /// `--verbose` always wins; otherwise a non-empty `RUST_LOG` replaces the
    /// configured level.
    pub fn effective_directive(&self, rust_log: Option<&str>) -> String {
        match rust_log {
            Some(env) if !self.verbose && !env.trim().is_empty() => env.to_string(),
            _ => self.directive(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Panics
    ///
    /// Panics if a subscriber has already been installed
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = EnvFilter::try_new(self.effective_directive(rust_log.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new(self.directive()));

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .flatten_event(true)
                    .with_target(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time()
                    .init();
            }
        }
    }
}

/// Initialize logging from the environment
///
/// Respects `VKPOST_LOG_FORMAT` and `VKPOST_LOG_LEVEL`. Falls back to text
/// format at `warn` so a plain run prints nothing but results and errors.
/// `RUST_LOG`, when set, overrides the level unless `verbose` is on.
///
/// ```bash
/// VKPOST_LOG_FORMAT=json VKPOST_LOG_LEVEL=debug vk-post --token T --owner-id 1 --message hi
/// ```
pub fn init_from_env(verbose: bool) {
    let format = std::env::var("VKPOST_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("VKPOST_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    LoggingConfig::new(format, level, verbose).init();
}
