//! Usage and version text.

use std::fmt::Write as _;

use crate::constants;

/// Version banner, e.g. `skeleton Skeleton, Version 0.1.0`.
#[must_use]
pub fn version_line(program: &str) -> String {
    format!(
        "{program} {}, Version {}",
        constants::APP_TITLE,
        constants::APP_VERSION
    )
}

/// Full usage message, ending with a newline.
#[must_use]
pub fn usage(program: &str) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", version_line(program));
    let _ = writeln!(text, "Usage:");
    let _ = writeln!(text, "    {program} [-v] [-r count] filename...");
    let _ = writeln!(text, "Options:");
    let _ = writeln!(text, "    -v  or  --verbose         Verbose mode");
    let _ = writeln!(text, "    -r #  or --repeat=#       Repeat count, default 1");
    let _ = writeln!(text, "    -V  or  --version         Print version and exit");
    let _ = writeln!(text, "    -h  or  --help            Print this message");
    text
}
