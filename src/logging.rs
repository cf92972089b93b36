//! Logging setup.
//!
//! Structured logging via the tracing crate. The CLI keeps output quiet by
//! default; `-v` turns on debug-level detail (including the HTTP calls the
//! api module traces) and `--json` switches to machine-readable lines.

use std::io::{self, IsTerminal};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub color: bool,
    pub show_target: bool,
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            color: true,
            show_target: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_args(quiet: bool, verbose: bool, json: bool) -> Self {
        let level = if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            Level::WARN
        };

        Self {
            level,
            color: !quiet && !json && io::stdout().is_terminal(),
            show_target: verbose,
            json_format: json,
        }
    }
}

/// Initialize the global subscriber. Call once, before any workflow runs.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meistertask_cli={}", config.level)));

    let registry = Registry::default().with(env_filter);

    if config.json_format {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr);
        json_layer.with_subscriber(registry).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(config.show_target)
            .with_level(true)
            .with_ansi(config.color)
            .without_time()
            .with_writer(io::stderr);
        fmt_layer.with_subscriber(registry).init();
    }

    Ok(())
}
