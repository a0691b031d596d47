//! Error types for pseudolens.
//!
//! The parser core never fails on string input; malformed markers are data,
//! not errors. Faults only arise at the edges:
//!
//! - [`InternalFault`] - transport-level failure reported to HTTP callers
//!   as `{"success": false, "error": ...}` with status 400
//! - [`InputError`] - reading a pseudo-file from disk or stdin for the CLI
//! - [`AppError`] - top-level error returned from `main`, wrapping the
//!   config, logging, input and I/O failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Generic request failure carrying a human-readable message.
///
/// This is the only error kind the HTTP layer exposes. It is terminal for
/// the request it occurred in; the caller recovers by resubmitting
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InternalFault {
    message: String,
}

impl InternalFault {
    /// Create a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message sent back to the caller.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors encountered when reading a pseudo-file for the CLI.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as provided on the command line.
        path: PathBuf,
    },

    /// No file was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Any other I/O failure, including non-UTF-8 content.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level application error.
///
/// Every failure that can end the process converts into this type via
/// `From`, so `main` can propagate with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Pseudo-file could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Binding, serving or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsed document could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn internal_fault_displays_message_verbatim() {
        let fault = InternalFault::new("Failed to parse pseudo file: boom");
        assert_eq!(fault.to_string(), "Failed to parse pseudo file: boom");
        assert_eq!(fault.message(), "Failed to parse pseudo file: boom");
    }

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pseudo"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.pseudo"));
    }

    #[test]
    fn input_error_no_input_display() {
        let msg = InputError::NoInput.to_string();
        assert!(msg.contains("No input source"));
        assert!(msg.contains("file path or pipe data to stdin"));
    }

    #[test]
    fn input_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: InputError = io_err.into();
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn app_error_from_input_error() {
        let err: AppError = InputError::NoInput.into();
        assert!(matches!(err, AppError::Input(InputError::NoInput)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }

    #[test]
    fn app_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            path: PathBuf::from("/etc/pseudolens.toml"),
            reason: "expected `=`".to_string(),
        };
        let err: AppError = config_err.into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("/etc/pseudolens.toml"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::AddrInUse, "address in use");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
