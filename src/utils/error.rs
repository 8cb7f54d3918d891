//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types.
//! Missing source files are not errors here; they are absorbed by the
//! enricher and only show up as frames without context.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decomposing an error into call sites
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Invalid {field} number in stack frame: {line}")]
    InvalidNumber {
        field: &'static str,
        line: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Malformed error object: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that abort frame extraction as a whole
///
/// No partial frame list is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum StacktraceError {
    #[error("Failed to extract call sites: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Failed to read source file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
