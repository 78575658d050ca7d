//! Tracing subscriber setup
//!
//! Logs always go to stderr so they never mix with `press` output on stdout.
//! `RUST_LOG` overrides the level derived from `-v`/`-q`.

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

/// Builds the level filter for a configuration
#[must_use]
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(config: &AppConfig) {
    let filter = env_filter(config);
    let ansi = config.color.should_color_stderr();

    let installed = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .flatten_event(true)
            .with_target(true)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(false)
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
