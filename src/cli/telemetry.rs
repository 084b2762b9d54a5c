//! Tracing subscriber setup for the CLI.
//!
//! `GARDISTO_LOG_LEVEL` always wins; the `-v` count only sets the default
//! directive when the variable is unset.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

const LOG_LEVEL_ENV: &str = "GARDISTO_LOG_LEVEL";

/// Default level for a `-v` count; errors are always logged.
const fn default_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    let env_filter = EnvFilter::builder()
        .with_env_var(LOG_LEVEL_ENV)
        .with_default_directive(default_level(verbosity).into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_level(0), Level::ERROR);
        assert_eq!(default_level(1), Level::WARN);
        assert_eq!(default_level(2), Level::INFO);
        assert_eq!(default_level(3), Level::DEBUG);
        assert_eq!(default_level(4), Level::TRACE);
        assert_eq!(default_level(9), Level::TRACE);
    }
}
