//! # Heddle Parser
//!
//! Parser for the Heddle process-chart notation. This crate turns raw chart
//! text into the semantic model rendered by the main crate:
//!
//! 1. **Segment** — split the file into named modules on `\module` markers
//! 2. **Clean** — drop comments, annotations, and blank lines
//! 3. **Resolve** — derive each statement's nesting level from indentation
//! 4. **Classify** — match the leading backslash token to a statement kind
//! 5. **Extract** — collect inline `\in`/`\out` data references
//! 6. **Sequence** — split into process and data sequences with sibling links
//! 7. **Merge** — synthesize data items for undeclared references
//!
//! ## Usage
//!
//! ```
//! use heddle_core::semantic::LEVEL_MAX;
//! use heddle_parser::{build_chart, split_modules};
//!
//! let source = "\\module demo\nstep one \\out x\n";
//! let modules = split_modules(source);
//! let chart = build_chart(&modules[0], LEVEL_MAX).unwrap();
//! assert_eq!(chart.name(), "demo");
//! ```

mod io;
mod level;
mod merge;
mod module;
mod sequence;
mod statement;

pub mod error;

pub use io::{IoScan, scan_io};
pub use level::{Indent, TAB_WIDTH, resolve_indent};
pub use merge::merge_io_refs;
pub use module::{MODULE_MARKER, ModuleSource, SourceLine, clean_lines, split_modules};
pub use sequence::{data_sequence, process_sequence};
pub use statement::classify;

use log::{debug, trace};

use heddle_core::semantic::{Chart, LineRecord};

use error::ParseError;

/// Compiles one module into its chart model.
///
/// Runs cleaning, level resolution, classification, and reference extraction
/// over the module's lines, then splits them into the process sequence
/// (truncated to `level_limit`) and the deduplicated data sequence with
/// undeclared references merged in.
///
/// # Errors
///
/// Returns [`ParseError::InvalidIndent`] for the first statement whose
/// indentation matches no level pattern; the error identifies the offending
/// source line.
pub fn build_chart(module: &ModuleSource, level_limit: u32) -> Result<Chart, ParseError> {
    debug!(module = module.name(), limit = level_limit; "Building chart");

    let cleaned = clean_lines(module.lines());
    let mut records = Vec::with_capacity(cleaned.len());

    for line in &cleaned {
        let indent = resolve_indent(line.text()).ok_or_else(|| ParseError::InvalidIndent {
            line_no: line.number(),
            line: line.text().to_string(),
        })?;
        let Indent::Level(level) = indent else {
            // The cleaner drops blank lines; tolerate them anyway.
            continue;
        };

        let (kind, body) = classify(line.text());
        let scan = scan_io(&body);
        records.push(LineRecord::new(
            line.text(),
            line.number(),
            level,
            kind,
            body,
            scan.label,
            scan.inputs,
            scan.outputs,
        ));
    }

    trace!(records = records.len(); "Parsed line records");

    let process = process_sequence(&records, level_limit);
    let data = merge_io_refs(&process, data_sequence(&records));

    debug!(
        module = module.name(),
        process_len = process.len(),
        data_len = data.len();
        "Chart built"
    );
    Ok(Chart::new(module.name(), process, data))
}
