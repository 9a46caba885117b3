//! Error types for chart parsing.
//!
//! The pipeline has a single fatal condition: a statement whose indentation
//! matches no level pattern. Everything else (unknown kind tokens, nameless
//! references, empty modules) degrades to a safe default and parsing
//! continues.

use thiserror::Error;

/// Error type for the parsing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A statement is indented with mixed tabs and spaces, a space count
    /// that is not a multiple of four, or nesting past the level range.
    #[error("wrong indent pattern at line {line_no}: {line:?}")]
    InvalidIndent {
        /// 1-based line number in the source file.
        line_no: usize,
        /// The offending line, with its indentation intact.
        line: String,
    },
}

impl ParseError {
    /// Returns the 1-based source line the error points at.
    pub fn line_no(&self) -> usize {
        match self {
            Self::InvalidIndent { line_no, .. } => *line_no,
        }
    }

    /// Returns the offending line's content.
    pub fn line(&self) -> &str {
        match self {
            Self::InvalidIndent { line, .. } => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_indent_display_names_the_line() {
        let err = ParseError::InvalidIndent {
            line_no: 7,
            line: "   three spaces".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("three spaces"));
    }
}
