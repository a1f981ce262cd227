//! Command-line argument definitions and option resolution.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use thiserror::Error;

use crate::config::Config;
use crate::constants;

/// Skeleton for a generic command-line program
///
/// Help and version flags are declared by hand so the driver controls their
/// output stream and the order in which they take effect.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Verbose mode
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Repeat count, default 1
    #[arg(short, long, value_name = "#", action = ArgAction::Append, allow_hyphen_values = true)]
    pub repeat: Vec<String>,

    /// Print version and exit
    #[arg(short = 'V', long, action = ArgAction::Count)]
    pub version: u8,

    /// Print this message
    #[arg(short, long, action = ArgAction::Count)]
    pub help: u8,

    /// Files to process; everything from the first filename on is positional
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}

/// Fatal problems with the command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// Unknown option, missing option argument, or other syntax fault.
    #[error("{0}")]
    Syntax(String),

    /// `--repeat` value that is not an integer.
    #[error("{prefix}{0}", prefix = constants::MSG_BAD_REPEAT)]
    BadRepeat(String),
}

/// Parsed flags and the remaining positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
    pub repeat: i64,
    pub files: Vec<PathBuf>,
}

impl Options {
    /// Builds the run configuration for `program`.
    #[must_use]
    pub fn to_config(&self, program: impl Into<String>) -> Config {
        Config {
            verbose: self.verbose,
            repeat: self.repeat,
            ..Config::new(program)
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage and exit successfully.
    ShowHelp,
    /// Print the version banner and exit successfully.
    ShowVersion,
    /// Process files with these options.
    Run(Options),
}

/// Option occurrence, keyed by its position on the command line.
enum Event {
    Help,
    Version,
    Repeat(i64),
    BadRepeat(String),
}

/// Parses `argv` (including the program name in position 0).
///
/// Help, version and repeat occurrences take effect in argument order: the
/// first help or version flag, or the first malformed repeat value, ends
/// parsing the way a getopt loop would. This also holds when a later argument
/// is malformed: `-V --bogus` still shows the version.
///
/// # Errors
///
/// Returns [`UsageError`] for malformed options or a bad repeat value.
pub fn parse_options<I, T>(argv: I) -> Result<Action, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let matches = match Args::command().try_get_matches_from(&argv) {
        Ok(matches) => matches,
        Err(e) => {
            let tokens = argv.iter().skip(1).map(OsString::as_os_str);
            return match exit_before_malformed(tokens) {
                Some(outcome) => outcome,
                None => Err(UsageError::Syntax(describe(&e))),
            };
        }
    };
    let args = Args::from_arg_matches(&matches).map_err(|e| UsageError::Syntax(describe(&e)))?;

    let mut events = Vec::new();
    for index in flag_indices(&matches, "help") {
        events.push((index, Event::Help));
    }
    for index in flag_indices(&matches, "version") {
        events.push((index, Event::Version));
    }
    if let Some(indices) = matches.indices_of("repeat") {
        for (index, value) in indices.zip(args.repeat.iter()) {
            let event = match parse_repeat(value) {
                Some(count) => Event::Repeat(count),
                None => Event::BadRepeat(value.clone()),
            };
            events.push((index, event));
        }
    }
    events.sort_by_key(|(index, _)| *index);

    let mut repeat = constants::DEFAULT_REPEAT;
    for (_, event) in events {
        match event {
            Event::Help => return Ok(Action::ShowHelp),
            Event::Version => return Ok(Action::ShowVersion),
            Event::BadRepeat(value) => return Err(UsageError::BadRepeat(value)),
            Event::Repeat(count) => repeat = count,
        }
    }

    Ok(Action::Run(Options {
        verbose: args.verbose > 0,
        repeat,
        files: args.files,
    }))
}

/// Returns the filenames, or `None` when there are none.
///
/// An empty list is treated as a request for help, not as an error.
#[must_use]
pub fn validate_args(files: Vec<PathBuf>) -> Option<Vec<PathBuf>> {
    if files.is_empty() {
        None
    } else {
        Some(files)
    }
}

fn flag_indices(matches: &ArgMatches, id: &str) -> Vec<usize> {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return Vec::new();
    }
    matches
        .indices_of(id)
        .map(Iterator::collect)
        .unwrap_or_default()
}

fn parse_repeat(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn repeat_outcome(value: &str) -> Option<Result<Action, UsageError>> {
    match parse_repeat(value) {
        Some(_) => None,
        None => Some(Err(UsageError::BadRepeat(value.to_string()))),
    }
}

/// Walks the options left to right once clap has rejected the line.
///
/// Returns the help/version action or repeat error met before the first
/// argument that cannot be understood, the first positional, or `--`.
fn exit_before_malformed<'a>(
    mut tokens: impl Iterator<Item = &'a OsStr>,
) -> Option<Result<Action, UsageError>> {
    while let Some(token) = tokens.next() {
        let token = token.to_str()?;
        if token == "--" || token == "-" || !token.starts_with('-') {
            return None;
        }

        if let Some(long) = token.strip_prefix("--") {
            match long.split_once('=') {
                Some(("repeat", value)) => {
                    if let Some(outcome) = repeat_outcome(value) {
                        return Some(outcome);
                    }
                }
                Some(_) => return None,
                None => match long {
                    "help" => return Some(Ok(Action::ShowHelp)),
                    "version" => return Some(Ok(Action::ShowVersion)),
                    "verbose" => {}
                    "repeat" => {
                        let value = tokens.next()?.to_str()?;
                        if let Some(outcome) = repeat_outcome(value) {
                            return Some(outcome);
                        }
                    }
                    _ => return None,
                },
            }
            continue;
        }

        let shorts = &token[1..];
        for (at, flag) in shorts.char_indices() {
            match flag {
                'h' => return Some(Ok(Action::ShowHelp)),
                'V' => return Some(Ok(Action::ShowVersion)),
                'v' => {}
                'r' => {
                    let attached = &shorts[at + 1..];
                    let value = if attached.is_empty() {
                        tokens.next()?.to_str()?
                    } else {
                        attached
                    };
                    if let Some(outcome) = repeat_outcome(value) {
                        return Some(outcome);
                    }
                    break;
                }
                _ => return None,
            }
        }
    }
    None
}

/// First line of a clap error without its `error: ` prefix.
fn describe(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
