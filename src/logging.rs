//! Tracing subscriber setup.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Picks the filter directives for a run.
///
/// An explicit `SKELETON_LOG` value wins; otherwise `--verbose` turns on
/// debug events for this crate.
#[must_use]
pub fn filter_directives(env_value: Option<&str>, verbose: bool) -> String {
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => directives.to_string(),
        None if verbose => constants::LOG_VERBOSE_FILTER.to_string(),
        None => constants::LOG_DEFAULT_FILTER.to_string(),
    }
}

/// Installs a stderr `fmt` subscriber as the global default.
///
/// # Errors
///
/// Returns an error if the directives do not parse or a global subscriber is
/// already installed.
pub fn init(verbose: bool) -> Result<()> {
    let env_value = std::env::var(constants::LOG_ENV_VAR).ok();
    let filter = EnvFilter::try_new(filter_directives(env_value.as_deref(), verbose))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))
}
