/// Tracing setup: stderr output filtered by `WIKIJS_LOG`, or `debug` with `--debug`.
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "WIKIJS_LOG";

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        match std::env::var(LOG_ENV) {
            Ok(directive) => EnvFilter::try_new(&directive)
                .with_context(|| format!("invalid {LOG_ENV} directive '{directive}'"))?,
            Err(_) => EnvFilter::new("warn"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to install tracing subscriber")
}
