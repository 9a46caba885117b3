//! Inline `\in` / `\out` reference extraction.
//!
//! References may appear anywhere in a statement's remainder. Each marker
//! followed by a name token contributes one reference; the cleaned text with
//! all markers removed becomes the statement's display label and identity.

use std::sync::LazyLock;

use regex::Regex;

use heddle_core::semantic::DataRef;

static INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\in\s+(\S+)?").expect("input pattern is valid"));

static OUTPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\out\s+(\S+)?").expect("output pattern is valid"));

/// References extracted from one statement, with its cleaned label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoScan {
    /// Ordered input references.
    pub inputs: Vec<DataRef>,
    /// Ordered output references.
    pub outputs: Vec<DataRef>,
    /// The text with every marker removed and surrounding whitespace
    /// trimmed.
    pub label: String,
}

/// Scans statement text for input and output references.
///
/// A marker with no following name is stripped from the label but yields no
/// reference.
pub fn scan_io(text: &str) -> IoScan {
    let collect = |pattern: &Regex| {
        pattern
            .captures_iter(text)
            .filter_map(|capture| capture.get(1))
            .map(|name| DataRef::new(name.as_str()))
            .collect()
    };

    let inputs = collect(&INPUT_PATTERN);
    let outputs = collect(&OUTPUT_PATTERN);

    let without_inputs = INPUT_PATTERN.replace_all(text, "");
    let label = OUTPUT_PATTERN
        .replace_all(&without_inputs, "")
        .trim()
        .to_string();

    IoScan {
        inputs,
        outputs,
        label,
    }
}
