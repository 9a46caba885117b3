//! Statement kind classification.

use heddle_core::semantic::StatementKind;

/// Classifies a line by its leading backslash token.
///
/// Returns the kind and the remaining statement text. Lines with a
/// recognized token lose it; everything else — empty lines, lines without a
/// leading `\`, and unknown tokens — comes back as [`StatementKind::Normal`]
/// with the *original* line untouched, so callers must not assume the
/// remainder is clean.
pub fn classify(line: &str) -> (StatementKind, String) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (StatementKind::Normal, line.to_string());
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (trimmed, ""),
    };

    if !head.starts_with('\\') {
        return (StatementKind::Normal, line.to_string());
    }

    match StatementKind::from_token(head) {
        Some(kind) => (kind, rest.to_string()),
        None => (StatementKind::Normal, line.to_string()),
    }
}
