//! skeleton CLI entry point.

use std::io;
use std::process::ExitCode;

use color_eyre::Result;
use skeleton::cli::commands;
use skeleton::logging;
use skeleton::processor::EchoFilename;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let status = commands::run(
        std::env::args_os(),
        &mut EchoFilename,
        &mut out,
        &mut err,
        |config| logging::init(config.verbose),
    )?;

    Ok(status.into())
}
