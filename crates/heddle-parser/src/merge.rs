//! Reconciliation of process references with the data column.
//!
//! Data items that processes read or write without declaring them still need
//! a glyph to wire to. This pass appends one synthesized record per distinct
//! undeclared name, at the data column's origin level, then rebuilds the
//! sequence so the new records carry valid indices and sibling links.

use indexmap::IndexSet;
use log::debug;

use heddle_core::semantic::{LineRecord, Sequence};

/// Appends synthesized data records for every process reference whose name
/// has no declared data item, returning the rebuilt data sequence.
///
/// Candidates are visited in process order, inputs before outputs per
/// record, and each distinct name is appended once.
pub fn merge_io_refs(process: &Sequence, data: Sequence) -> Sequence {
    let origin_level = data.min_level();
    let mut records = data.into_records();
    let mut known: IndexSet<String> = records
        .iter()
        .map(|record| record.label().to_string())
        .collect();

    let mut appended = 0usize;
    for record in process.records() {
        for reference in record.inputs().iter().chain(record.outputs()) {
            if known.insert(reference.name().to_string()) {
                records.push(LineRecord::synthetic_data(reference.name(), origin_level));
                appended += 1;
            }
        }
    }

    if appended > 0 {
        debug!(count = appended; "Merged undeclared references into data sequence");
    }
    Sequence::new(records)
}

#[cfg(test)]
mod tests {
    use heddle_core::semantic::{DataRef, LEVEL_MAX, StatementKind};

    use super::*;

    fn process_record(label: &str, inputs: &[&str], outputs: &[&str]) -> LineRecord {
        LineRecord::new(
            label,
            1,
            1,
            StatementKind::Normal,
            label,
            label,
            inputs.iter().map(DataRef::new).collect(),
            outputs.iter().map(DataRef::new).collect(),
        )
    }

    fn data_record(label: &str) -> LineRecord {
        LineRecord::new(
            format!("\\data {label}"),
            1,
            0,
            StatementKind::Data,
            label,
            label,
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_undeclared_references_are_appended_once() {
        let process = Sequence::new(vec![
            process_record("a", &["x"], &[]),
            process_record("b", &["x"], &["y"]),
        ]);
        let data = Sequence::new(Vec::new());

        let merged = merge_io_refs(&process, data);
        let labels: Vec<&str> = merged.records().iter().map(LineRecord::label).collect();
        assert_eq!(labels, vec!["x", "y"]);
    }

    #[test]
    fn test_declared_names_are_not_duplicated() {
        let process = Sequence::new(vec![process_record("a", &[], &["x"])]);
        let data = Sequence::new(vec![data_record("x")]);

        let merged = merge_io_refs(&process, data);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.records()[0].text(), "\\data x");
    }

    #[test]
    fn test_merge_is_idempotent_per_name() {
        let process = Sequence::new(vec![process_record("a", &["x", "x"], &["x"])]);
        let merged = merge_io_refs(&process, Sequence::new(Vec::new()));
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_appended_records_sit_at_data_origin_level() {
        let process = Sequence::new(vec![process_record("a", &["x"], &[])]);
        let data = Sequence::new(vec![data_record("declared")]);

        let merged = merge_io_refs(&process, data);
        assert_eq!(merged.records()[1].label(), "x");
        assert_eq!(merged.records()[1].level(), 0);
    }

    #[test]
    fn test_merge_into_empty_data_uses_sentinel_level() {
        let process = Sequence::new(vec![process_record("a", &["x"], &[])]);
        let merged = merge_io_refs(&process, Sequence::new(Vec::new()));

        // With nothing declared, synthesized records inherit the sentinel
        // and become the sequence minimum themselves.
        assert_eq!(merged.records()[0].level(), LEVEL_MAX);
        assert_eq!(merged.min_level(), LEVEL_MAX);
    }

    #[test]
    fn test_appended_records_are_linked() {
        let process = Sequence::new(vec![process_record("a", &["x"], &["y"])]);
        let data = Sequence::new(vec![]);

        let merged = merge_io_refs(&process, data);
        assert_eq!(merged.records()[0].seq_no(), 0);
        assert_eq!(merged.records()[1].seq_no(), 1);
        assert_eq!(merged.records()[1].before(), Some(0));
        assert_eq!(merged.records()[0].next(), Some(1));
    }

    #[test]
    fn test_inputs_merge_before_outputs() {
        let process = Sequence::new(vec![process_record("a", &["second"], &["first"])]);
        let merged = merge_io_refs(&process, Sequence::new(Vec::new()));

        // Inputs are visited first, so "second" lands ahead of "first".
        let labels: Vec<&str> = merged.records().iter().map(LineRecord::label).collect();
        assert_eq!(labels, vec!["second", "first"]);
    }
}
