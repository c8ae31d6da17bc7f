//! `tracing` subscriber setup for the onboarding binaries.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive. Takes precedence
/// over `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "CSV_ONBOARD_LOG";

/// Filter used when neither [`LOG_ENV_VAR`] nor `RUST_LOG` yields a valid directive.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from [`LOG_ENV_VAR`], then `RUST_LOG`, then [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    let primary = std::env::var(LOG_ENV_VAR).ok();
    let fallback = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(primary.as_deref(), fallback.as_deref())
}

/// First directive that parses wins; unparsable ones are skipped.
fn filter_from(primary: Option<&str>, fallback: Option<&str>) -> EnvFilter {
    [primary, fallback]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, writing to stderr.
///
/// `json` switches to one JSON object per event.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(json: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr);

    if json {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
    } else {
        builder
            .with_ansi(std::io::stderr().is_terminal())
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
    }
}
