//! Application-wide constants.
//!
//! Program metadata, message fragments and exit codes used by the driver.

// === Application Metadata ===

/// Package name (from Cargo.toml). Used when argv[0] is unavailable.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Title placed after the program name in the version banner.
pub const APP_TITLE: &str = "Skeleton";

// === Logging ===

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "SKELETON_LOG";
/// Filter used when nothing else is requested.
pub const LOG_DEFAULT_FILTER: &str = "warn";
/// Filter used with `--verbose`.
pub const LOG_VERBOSE_FILTER: &str = "warn,skeleton=debug";

// === Defaults ===

/// Repeat count when `--repeat` is not given.
pub const DEFAULT_REPEAT: i64 = 1;

// === Messages ===

/// Prefix of the per-file placeholder output line.
pub const MSG_FILENAME: &str = "Filename: ";
/// Separator between filename and message in per-file error lines.
pub const MSG_FILE_ERROR: &str = ": ERROR: ";
/// Prefix of the diagnostic for a malformed repeat value.
pub const MSG_BAD_REPEAT: &str = "Bad --repeat option: ";

// === Exit Codes ===

/// Process exit code for success.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for any failure.
pub const EXIT_FAILURE: u8 = 1;
