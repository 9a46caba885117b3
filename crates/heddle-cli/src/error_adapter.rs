//! Error adapter for converting `HeddleError` to miette diagnostics.
//!
//! This module bridges the library's standard error types and miette's rich
//! diagnostic formatting used in the CLI. Parse errors carry their source
//! text, so the offending line can be labeled in context.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use heddle::HeddleError;

/// Adapter exposing a [`HeddleError`] as a miette diagnostic.
pub struct DiagnosticAdapter<'a> {
    err: &'a HeddleError,
}

/// Wrap an error for rendering through a miette report handler.
pub fn to_reportable(err: &HeddleError) -> DiagnosticAdapter<'_> {
    DiagnosticAdapter { err }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            HeddleError::Parse { .. } => Some(Box::new(
                "indent each statement with tabs or groups of four spaces, never mixed",
            )),
            HeddleError::NoModules | HeddleError::ModuleNotFound(_) => Some(Box::new(
                "modules start with a `\\module name` line",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            HeddleError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let HeddleError::Parse { err, src } = self.err else {
            return None;
        };
        let span = line_span(src, err.line_no())?;
        let label = LabeledSpan::new_primary_with_span(
            Some("statement with unresolvable indentation".to_string()),
            span,
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Byte span of the 1-based `line_no` within `src`.
fn line_span(src: &str, line_no: usize) -> Option<SourceSpan> {
    let mut offset = 0usize;
    for (index, line) in src.split('\n').enumerate() {
        if index + 1 == line_no {
            return Some((offset, line.len()).into());
        }
        offset += line.len() + 1;
    }
    None
}
