//! Separation of records into the process and data sequences.
//!
//! Both sequences share one recipe — filter by kind, then let
//! [`Sequence::new`] assign numbering, sibling links, and the minimum level —
//! with two sequence-specific twists: the data side drops duplicate
//! declarations before numbering, and the process side can be truncated to a
//! level ceiling first so hidden records never participate in linkage.

use indexmap::IndexSet;
use log::debug;

use heddle_core::semantic::{LineRecord, Sequence};

/// Builds the process sequence: every non-data record at or above the level
/// ceiling, in source order.
pub fn process_sequence(records: &[LineRecord], level_limit: u32) -> Sequence {
    let filtered: Vec<LineRecord> = records
        .iter()
        .filter(|record| !record.kind().is_data())
        .filter(|record| record.level() <= level_limit)
        .cloned()
        .collect();

    debug!(records = filtered.len(), limit = level_limit; "Built process sequence");
    Sequence::new(filtered)
}

/// Builds the data sequence: data records in source order, first declaration
/// per label wins.
///
/// Later duplicates are discarded entirely, references included — only the
/// first declaration survives.
pub fn data_sequence(records: &[LineRecord]) -> Sequence {
    let mut seen: IndexSet<String> = IndexSet::new();
    let filtered: Vec<LineRecord> = records
        .iter()
        .filter(|record| record.kind().is_data())
        .filter(|record| seen.insert(record.label().to_string()))
        .cloned()
        .collect();

    debug!(records = filtered.len(); "Built data sequence");
    Sequence::new(filtered)
}
