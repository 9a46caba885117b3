//! Error types for chart compilation and rendering.

use std::io;

use thiserror::Error;

use heddle_parser::error::ParseError;

/// The main error type for Heddle operations.
///
/// The `Parse` variant keeps the source text alongside the structured parse
/// error so callers can render the offending line in context.
#[derive(Debug, Error)]
pub enum HeddleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("module `{0}` not found in input")]
    ModuleNotFound(String),

    #[error("input contains no modules")]
    NoModules,
}

impl HeddleError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
