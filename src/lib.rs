//! Skeleton for a generic command-line program.
//!
//! Parses a handful of flags, then hands each filename to a
//! [`processor::FileProcessor`] in order. A file that fails is reported and
//! the rest are still processed; the exit status records whether any failed.

pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod processor;
