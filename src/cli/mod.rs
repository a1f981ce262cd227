//! Command-line interface module.
//!
//! Provides argument parsing, usage text and the file-processing driver.

pub mod args;
pub mod commands;
pub mod usage;
