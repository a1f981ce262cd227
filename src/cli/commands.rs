//! Driver: parse, validate, process every file, report status.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use color_eyre::Result;
use tracing::debug;

use super::args::{self, Action, UsageError};
use super::usage;
use crate::config::{self, Config};
use crate::constants;
use crate::processor::FileProcessor;

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Success,
    Failure,
}

impl Status {
    /// Process exit code for this status.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => constants::EXIT_SUCCESS,
            Self::Failure => constants::EXIT_FAILURE,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        Self::from(status.code())
    }
}

/// Runs the program for `argv` (program name first).
///
/// Version text goes to `out`; usage and diagnostics go to `err`. `setup`
/// runs once options are known and before any file is processed.
///
/// # Errors
///
/// Returns an error if `setup` fails or `out`/`err` cannot be written outside
/// of per-file processing.
pub fn run<I, T, F>(
    argv: I,
    processor: &mut dyn FileProcessor,
    out: &mut dyn Write,
    err: &mut dyn Write,
    setup: F,
) -> Result<Status>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(&Config) -> Result<()>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = config::program_name(argv.first().and_then(|arg| arg.to_str()));

    let options = match args::parse_options(&argv) {
        Ok(Action::Run(options)) => options,
        Ok(Action::ShowVersion) => {
            writeln!(out, "{}", usage::version_line(&program))?;
            return Ok(Status::Success);
        }
        Ok(Action::ShowHelp) => {
            write!(err, "{}", usage::usage(&program))?;
            return Ok(Status::Success);
        }
        Err(e @ UsageError::BadRepeat(_)) => {
            writeln!(err, "{e}")?;
            write!(err, "{}", usage::usage(&program))?;
            return Ok(Status::Failure);
        }
        Err(UsageError::Syntax(reason)) => {
            writeln!(err, "{program}: {reason}")?;
            write!(err, "{}", usage::usage(&program))?;
            return Ok(Status::Failure);
        }
    };

    let config = options.to_config(program);
    let Some(files) = args::validate_args(options.files) else {
        write!(err, "{}", usage::usage(&config.program))?;
        return Ok(Status::Success);
    };

    setup(&config)?;
    debug!(
        verbose = config.verbose,
        repeat = config.repeat,
        files = files.len(),
        "options parsed"
    );

    process_files(&config, &files, processor, out, err)
}

/// Processes `files` in order; a failing file never stops the rest.
///
/// # Errors
///
/// Returns an error only if an error line cannot be written to `err`.
pub fn process_files(
    config: &Config,
    files: &[PathBuf],
    processor: &mut dyn FileProcessor,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Status> {
    let mut status = Status::Success;
    for path in files.iter().map(PathBuf::as_path) {
        debug!(file = %path.display(), "processing");
        if let Err(e) = processor.process(config, path, out) {
            debug!(file = %path.display(), error = %e, "processing failed");
            writeln!(err, "{}{}{e}", path.display(), constants::MSG_FILE_ERROR)?;
            status = Status::Failure;
        }
    }
    Ok(status)
}
