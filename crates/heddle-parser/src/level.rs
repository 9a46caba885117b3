//! Nesting-level resolution from leading indentation.
//!
//! A statement at level `N` is indented by exactly `N` tabs or exactly
//! `4 × N` spaces, never a mixture. Blank lines carry no level at all, which
//! [`Indent::Blank`] keeps distinct from level 0.

use heddle_core::semantic::LEVEL_MAX;

/// Spaces equivalent to one tab stop.
pub const TAB_WIDTH: usize = 4;

/// Outcome of indent resolution for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// The line is blank or whitespace-only and holds no statement.
    Blank,
    /// The line's nesting level.
    Level(u32),
}

/// Resolves the nesting level encoded by a line's indentation.
///
/// Returns `None` when the indentation matches no level: mixed tabs and
/// spaces, a space count that is not a multiple of [`TAB_WIDTH`], indentation
/// characters outside tab/space, or nesting at or past [`LEVEL_MAX`]. That is
/// the pipeline's only fatal condition and callers turn it into a parse
/// error carrying the line.
pub fn resolve_indent(line: &str) -> Option<Indent> {
    let body = line.trim_start();
    if body.trim().is_empty() {
        return Some(Indent::Blank);
    }

    let indent = &line[..line.len() - body.len()];
    if indent.is_empty() {
        return Some(Indent::Level(0));
    }

    let level = if indent.chars().all(|c| c == '\t') {
        indent.chars().count() as u32
    } else if indent.chars().all(|c| c == ' ') {
        let spaces = indent.len();
        if spaces % TAB_WIDTH != 0 {
            return None;
        }
        (spaces / TAB_WIDTH) as u32
    } else {
        return None;
    };

    (level < LEVEL_MAX).then_some(Indent::Level(level))
}
