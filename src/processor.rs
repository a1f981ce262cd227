//! Per-file processing.
//!
//! [`FileProcessor`] is the extension point for real work. The driver calls it
//! once per filename and turns any [`ProcessingError`] into an error line and a
//! failed exit status without stopping the batch.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::config::Config;
use crate::constants;

/// Fault raised while processing one file.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Failed(String),
}

/// Work performed for each filename.
pub trait FileProcessor {
    /// Processes a single file, writing any normal output to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessingError`] if this file could not be processed.
    fn process(
        &mut self,
        config: &Config,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<(), ProcessingError>;
}

/// Placeholder processor: prints the filename.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoFilename;

impl FileProcessor for EchoFilename {
    fn process(
        &mut self,
        _config: &Config,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<(), ProcessingError> {
        // TODO: replace with real per-file work; `config.repeat` is parsed but unused until then.
        writeln!(out, "{}{}", constants::MSG_FILENAME, path.display())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_prints_filename() {
        let config = Config::new("skel");
        let mut out = Vec::new();
        EchoFilename.process(&config, Path::new("a.txt"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Filename: a.txt\n");
    }

    #[test]
    fn test_echo_keeps_unusual_names() {
        let config = Config::new("skel");
        let mut out = Vec::new();
        EchoFilename.process(&config, Path::new("-dash name"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Filename: -dash name\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_echo_non_utf8_name() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let name = OsString::from_vec(b"a\xff.t".to_vec());
        let config = Config::new("skel");
        let mut out = Vec::new();
        EchoFilename
            .process(&config, Path::new(&name), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Filename: a\u{fffd}.t\n");
    }

    #[test]
    fn test_echo_write_failure_is_io_error() {
        let config = Config::new("skel");
        let err = EchoFilename
            .process(&config, Path::new("a.txt"), &mut BrokenPipe)
            .unwrap_err();
        assert!(matches!(err, ProcessingError::Io(_)));
        assert_eq!(err.to_string(), "broken pipe");
    }

    #[test]
    fn test_failed_message() {
        let err = ProcessingError::Failed("corrupt header".to_string());
        assert_eq!(err.to_string(), "corrupt header");
    }
}
