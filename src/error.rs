//! Error types for the listpick demo host.
//!
//! The picker itself never fails; these cover terminal setup, config
//! loading and log file handling.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the demo host
#[derive(Debug, Error)]
pub enum ListpickError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Result type alias for ListpickError
pub type Result<T> = std::result::Result<T, ListpickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ListpickError::Config {
            path: PathBuf::from("/tmp/config.toml"),
            message: "expected a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Config error in /tmp/config.toml: expected a boolean"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ListpickError = io.into();
        assert!(matches!(err, ListpickError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing");
    }
}
