//! Tracing initialization for the inventory tooling.

use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with environment-based configuration.
///
/// Uses the standard `RUST_LOG` variable for filtering:
/// - `RUST_LOG=debug` - Set global level
/// - `RUST_LOG=inventory_installer=debug` - Set per-crate levels
///
/// Uses `RUST_LOG_FORMAT` for output format (optional):
/// - `json` - JSON formatted output
/// - `compact` - Compact single-line output
/// - `pretty` - Pretty formatted output (default)
///
/// Events are written to stderr so they never interleave with stdout, with
/// ANSI colors only when stderr is a terminal.
pub fn init() -> Result<()> {
    init_with_defaults("warn")
}

/// Initialize with a default filter used when `RUST_LOG` is not set.
///
/// Fails rather than panics if a global subscriber is already installed.
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let ansi = ansi_enabled(&format, std::io::stderr().is_terminal());
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format.as_str() {
        "json" => registry
            .with(fmt::layer().with_ansi(ansi).with_writer(std::io::stderr).json())
            .try_init(),
        "compact" => registry
            .with(fmt::layer().with_ansi(ansi).with_writer(std::io::stderr).compact())
            .try_init(),
        _ => registry
            .with(fmt::layer().with_ansi(ansi).with_writer(std::io::stderr).pretty())
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}

/// Color escapes only for human formats on a terminal.
fn ansi_enabled(format: &str, stderr_is_terminal: bool) -> bool {
    format != "json" && stderr_is_terminal
}
