//! Shared helpers for skeleton integration tests.
//!
//! Runs the built binary and captures its streams and exit code.

use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

/// Result of running the skeleton binary.
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Lines written to stdout.
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Run the binary with `args` (program name excluded).
pub fn skeleton(args: &[&str]) -> CliResponse {
    skeleton_with_env(args, &[])
}

/// Run the binary with arguments that need not be valid UTF-8.
pub fn skeleton_os(args: &[OsString]) -> CliResponse {
    run_binary(args, &[])
}

/// Run the binary with `args` and extra environment variables.
pub fn skeleton_with_env(args: &[&str], env: &[(&str, &str)]) -> CliResponse {
    run_binary(args, env)
}

fn run_binary<S: AsRef<OsStr>>(args: &[S], env: &[(&str, &str)]) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skeleton"));
    cmd.args(args);
    cmd.env_remove("SKELETON_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());

    let output = cmd.output().expect("Failed to run skeleton binary");
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}
