//! Run configuration.
//!
//! Built once after option parsing and passed down the driver's call chain.

use std::path::Path;

use crate::constants;

/// Settings for a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Program name shown in usage and version text.
    pub program: String,
    /// Verbose mode (`-v`).
    pub verbose: bool,
    /// Repeat count (`-r`). Any integer is accepted, including zero and negatives.
    pub repeat: i64,
}

impl Config {
    /// Creates a configuration with default flag values.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            verbose: false,
            repeat: constants::DEFAULT_REPEAT,
        }
    }
}

/// Derives the program name from argv[0].
///
/// Only the final path component is kept, so `/usr/local/bin/skeleton` shows
/// as `skeleton` in usage and version text rather than argv[0] verbatim.
/// Falls back to the package name when argv[0] is missing or empty.
#[must_use]
pub fn program_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map_or_else(|| constants::APP_NAME.to_string(), str::to_string)
}
