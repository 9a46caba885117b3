//! Module segmentation and source cleaning.
//!
//! A chart file holds any number of modules, each opened by a `\module name`
//! line. Everything up to the next module marker (or end of input) belongs to
//! that module; text before the first marker is ignored.

/// Marker that opens a module: the token plus at least one space before the
/// name.
pub const MODULE_MARKER: &str = "\\module ";

/// Comment introducer; the rest of the line is discarded.
const COMMENT_CHAR: char = '#';

/// One line of module content, with its position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    number: usize,
    text: String,
}

impl SourceLine {
    /// Creates a source line with its 1-based file position.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Returns the 1-based line number in the source file.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the line text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A named module and its raw content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    name: String,
    lines: Vec<SourceLine>,
}

impl ModuleSource {
    /// Creates a module from its name and content lines.
    pub fn new(name: impl Into<String>, lines: Vec<SourceLine>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Returns the module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw content lines, in source order.
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }
}

/// Splits source text into modules on the module marker.
///
/// The marker must start the trimmed line; the name is whatever follows it,
/// trimmed again so `\module  name` parses the same as `\module name`.
pub fn split_modules(source: &str) -> Vec<ModuleSource> {
    let mut modules = Vec::new();
    let mut current: Option<ModuleSource> = None;

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(MODULE_MARKER) {
            if let Some(finished) = current.take() {
                modules.push(finished);
            }
            current = Some(ModuleSource::new(rest.trim(), Vec::new()));
        } else if let Some(module) = current.as_mut() {
            module.lines.push(SourceLine::new(index + 1, line));
        }
        // Lines before the first marker are dropped.
    }

    if let Some(finished) = current {
        modules.push(finished);
    }

    modules
}

/// Removes content that carries no statements.
///
/// Per line: the comment suffix is cut, lines whose trimmed body is wrapped
/// in a bracket pair are dropped, and lines left empty are dropped. Leading
/// whitespace of surviving lines is preserved — it encodes the nesting
/// level.
pub fn clean_lines(lines: &[SourceLine]) -> Vec<SourceLine> {
    const OPEN_BRACKETS: [char; 2] = ['(', '（'];
    const CLOSE_BRACKETS: [char; 2] = [')', '）'];

    let mut cleaned = Vec::new();

    for line in lines {
        let uncommented = line
            .text()
            .split(COMMENT_CHAR)
            .next()
            .unwrap_or_default();

        let trimmed = uncommented.trim();
        if trimmed.is_empty() {
            continue;
        }

        let wrapped = trimmed.starts_with(OPEN_BRACKETS) && trimmed.ends_with(CLOSE_BRACKETS);
        if wrapped {
            continue;
        }

        cleaned.push(SourceLine::new(line.number(), uncommented));
    }

    cleaned
}
