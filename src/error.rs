use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pandoc::PandocError;

#[derive(Error, Debug)]
pub enum AmeError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("conversion failed: {0}")]
    Converter(#[from] PandocError),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Convenience type alias for Results with AmeError
pub type Result<T> = std::result::Result<T, AmeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_the_path() {
        let err = AmeError::Write {
            path: PathBuf::from("/tmp/notes.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/notes.md"), "got: {}", msg);
        assert!(msg.contains("denied"), "got: {}", msg);
    }

    #[test]
    fn pandoc_error_converts() {
        let err: AmeError = PandocError::NotInstalled.into();
        assert!(matches!(err, AmeError::Converter(PandocError::NotInstalled)));
        assert_eq!(err.to_string(), "conversion failed: pandoc is not installed");
    }

    #[test]
    fn io_error_converts_to_terminal() {
        let io_err = io::Error::new(io::ErrorKind::Other, "tty gone");
        let err: AmeError = io_err.into();
        assert!(matches!(err, AmeError::Terminal(_)));
    }
}
