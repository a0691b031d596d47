//! Pseudo-file input sources for the `parse` command.
//!
//! A document comes either from a file path or from piped stdin. Either way
//! it is read to completion before parsing; there is no streaming mode.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where a document is read from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Read the whole file at this path.
    File(PathBuf),
    /// Read piped stdin until EOF.
    Stdin,
}

impl DocumentSource {
    /// Read the full document text.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file vanished since
    /// detection, `InputError::Io` for read failures and non-UTF-8 input.
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            DocumentSource::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path: path.clone() });
                }
                let content = std::fs::read_to_string(path)?;
                debug!(path = %path.display(), bytes = content.len(), "Read pseudo file");
                Ok(content)
            }
            DocumentSource::Stdin => read_from(std::io::stdin().lock()),
        }
    }
}

/// Detect and validate the document source.
///
/// # Logic:
/// 1. If file path is provided: it must exist
/// 2. Else if stdin is piped: use stdin
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file and
/// `InputError::NoInput` when there is nothing to read.
pub fn detect_document_source(file: Option<PathBuf>) -> Result<DocumentSource, InputError> {
    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(DocumentSource::File(path)),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(DocumentSource::Stdin),
    }
}

/// Detect the source and read it in one step.
///
/// # Errors
///
/// See [`detect_document_source`] and [`DocumentSource::read`].
pub fn read_document(file: Option<PathBuf>) -> Result<String, InputError> {
    detect_document_source(file)?.read()
}

/// Read everything from `reader` as UTF-8 text.
///
/// # Errors
///
/// Returns `InputError::Io` on read failure or invalid UTF-8.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    debug!(bytes = content.len(), "Read pseudo file from stdin");
    Ok(content)
}
