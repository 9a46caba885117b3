//! Semantic model for parsed charts.
//!
//! A chart is a named pair of statement sequences: the process column (every
//! non-data statement, in source order) and the data column (declared data
//! items, deduplicated, plus entries synthesized from unmatched references).
//! The types here are plain data; the pipeline that produces them lives in
//! the parser crate, and the layout that consumes them in the main crate.

/// The exclusive upper bound on nesting levels.
pub const LEVEL_MAX: u32 = 30;

/// The classified kind of a statement line.
///
/// Kinds are introduced by a leading backslash token (`\fork`, `\data`, ...).
/// Lines without a recognized token are [`StatementKind::Normal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// A plain process step.
    #[default]
    Normal,
    /// A conditional split.
    Fork,
    /// A loop.
    Repeat,
    /// A call into another module.
    Call,
    /// An early exit; draws its own terminator.
    Return,
    /// The true branch of a condition.
    True,
    /// The false branch of a condition.
    False,
    /// A multi-way branch arm.
    Branch,
    /// A data item declaration.
    Data,
    /// A module header; never drawn.
    Module,
}

impl StatementKind {
    /// Returns the backslash token that introduces this kind, or `None` for
    /// [`StatementKind::Normal`], which has no token.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Fork => Some("\\fork"),
            Self::Repeat => Some("\\repeat"),
            Self::Call => Some("\\mod"),
            Self::Return => Some("\\return"),
            Self::True => Some("\\true"),
            Self::False => Some("\\false"),
            Self::Branch => Some("\\branch"),
            Self::Data => Some("\\data"),
            Self::Module => Some("\\module"),
        }
    }

    /// Looks a token up in the statement vocabulary.
    ///
    /// Returns `None` for unrecognized tokens; callers treat those lines as
    /// [`StatementKind::Normal`] without stripping anything.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "\\fork" => Some(Self::Fork),
            "\\repeat" => Some(Self::Repeat),
            "\\mod" => Some(Self::Call),
            "\\return" => Some(Self::Return),
            "\\true" => Some(Self::True),
            "\\false" => Some(Self::False),
            "\\branch" => Some(Self::Branch),
            "\\data" => Some(Self::Data),
            "\\module" => Some(Self::Module),
            _ => None,
        }
    }

    /// Returns true for data item declarations.
    pub fn is_data(self) -> bool {
        self == Self::Data
    }
}

/// One inline `\in` or `\out` reference to a data item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRef {
    name: String,
}

impl DataRef {
    /// Creates a reference to the named data item.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the referenced data item name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One classified, leveled, reference-extracted statement line.
///
/// Records are created once per surviving source line and enriched by each
/// pipeline stage. The `label` (kind token and references stripped, trimmed)
/// is the stable identity used for glyph text, deduplication, and wire
/// matching.
#[derive(Debug, Clone)]
pub struct LineRecord {
    text: String,
    line_no: usize,
    level: u32,
    kind: StatementKind,
    body: String,
    label: String,
    inputs: Vec<DataRef>,
    outputs: Vec<DataRef>,
    seq_no: usize,
    before: Option<usize>,
    next: Option<usize>,
}

impl LineRecord {
    /// Creates a record from the parsed parts of a source line.
    ///
    /// Sequence number and sibling links start unset and are assigned when
    /// the record joins a [`Sequence`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: impl Into<String>,
        line_no: usize,
        level: u32,
        kind: StatementKind,
        body: impl Into<String>,
        label: impl Into<String>,
        inputs: Vec<DataRef>,
        outputs: Vec<DataRef>,
    ) -> Self {
        Self {
            text: text.into(),
            line_no,
            level,
            kind,
            body: body.into(),
            label: label.into(),
            inputs,
            outputs,
            seq_no: 0,
            before: None,
            next: None,
        }
    }

    /// Creates a data record standing in for a referenced but undeclared
    /// data item.
    pub fn synthetic_data(name: &str, level: u32) -> Self {
        Self::new(
            format!("\\data {name}"),
            0,
            level,
            StatementKind::Data,
            name,
            name,
            Vec::new(),
            Vec::new(),
        )
    }

    /// Returns the original source line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the 1-based source line number (0 for synthesized records).
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Returns the resolved nesting level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the classified statement kind.
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Returns the line with the kind token stripped.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the display label, which is also the record's identity.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the ordered input references.
    pub fn inputs(&self) -> &[DataRef] {
        &self.inputs
    }

    /// Returns the ordered output references.
    pub fn outputs(&self) -> &[DataRef] {
        &self.outputs
    }

    /// Returns the record's index within its sequence.
    pub fn seq_no(&self) -> usize {
        self.seq_no
    }

    /// Returns the index of the nearest preceding same-level sibling.
    pub fn before(&self) -> Option<usize> {
        self.before
    }

    /// Returns the index of the nearest following same-level sibling.
    pub fn next(&self) -> Option<usize> {
        self.next
    }
}

/// An ordered run of records with sibling linkage and a layout origin level.
///
/// Constructing a sequence assigns sequence numbers and resolves the sibling
/// chain: each record links to the nearest earlier record at its exact level,
/// scanning past deeper levels but never across a strictly shallower one.
/// `min_level` is the smallest level present, or [`LEVEL_MAX`] for an empty
/// sequence — callers guard emptiness before using it as an origin.
#[derive(Debug, Clone)]
pub struct Sequence {
    records: Vec<LineRecord>,
    min_level: u32,
}

impl Sequence {
    /// Builds a sequence from records in their final order, assigning
    /// sequence numbers, sibling links, and the minimum level.
    pub fn new(mut records: Vec<LineRecord>) -> Self {
        for (index, record) in records.iter_mut().enumerate() {
            record.seq_no = index;
            record.before = None;
            record.next = None;
        }

        for current in 0..records.len() {
            let level = records[current].level;
            for earlier in (0..current).rev() {
                if records[earlier].level == level {
                    records[current].before = Some(earlier);
                    records[earlier].next = Some(current);
                    break;
                }
                if records[earlier].level < level {
                    // A shallower statement closes the chain; nothing above
                    // it can be a sibling of this record.
                    break;
                }
            }
        }

        let min_level = records
            .iter()
            .map(LineRecord::level)
            .min()
            .unwrap_or(LEVEL_MAX);

        Self { records, min_level }
    }

    /// Returns the records in sequence order.
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    /// Returns the smallest level present, or [`LEVEL_MAX`] when empty.
    pub fn min_level(&self) -> u32 {
        self.min_level
    }

    /// Returns true when the sequence holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Consumes the sequence, yielding its records for rebuilding.
    pub fn into_records(self) -> Vec<LineRecord> {
        self.records
    }
}

/// A compiled module: name plus its process and data sequences.
#[derive(Debug, Clone)]
pub struct Chart {
    name: String,
    process: Sequence,
    data: Sequence,
}

impl Chart {
    /// Creates a chart from its finished sequences.
    pub fn new(name: impl Into<String>, process: Sequence, data: Sequence) -> Self {
        Self {
            name: name.into(),
            process,
            data,
        }
    }

    /// Returns the module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the process sequence.
    pub fn process(&self) -> &Sequence {
        &self.process
    }

    /// Returns the data sequence.
    pub fn data(&self) -> &Sequence {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(level: u32, label: &str) -> LineRecord {
        LineRecord::new(
            label,
            1,
            level,
            StatementKind::Normal,
            label,
            label,
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_kind_token_round_trip() {
        for kind in [
            StatementKind::Fork,
            StatementKind::Repeat,
            StatementKind::Call,
            StatementKind::Return,
            StatementKind::True,
            StatementKind::False,
            StatementKind::Branch,
            StatementKind::Data,
            StatementKind::Module,
        ] {
            let token = kind.token().expect("non-normal kinds carry a token");
            assert_eq!(StatementKind::from_token(token), Some(kind));
        }
        assert_eq!(StatementKind::Normal.token(), None);
        assert_eq!(StatementKind::from_token("\\bogus"), None);
    }

    #[test]
    fn test_sequence_assigns_indices_in_order() {
        let sequence = Sequence::new(vec![record_at(0, "a"), record_at(0, "b")]);
        assert_eq!(sequence.records()[0].seq_no(), 0);
        assert_eq!(sequence.records()[1].seq_no(), 1);
    }

    #[test]
    fn test_sibling_chain_links_equal_levels() {
        // Levels [0, 1, 1, 0]: the two level-1 records link to each other,
        // and the level-0 records link to each other.
        let sequence = Sequence::new(vec![
            record_at(0, "a"),
            record_at(1, "b"),
            record_at(1, "c"),
            record_at(0, "d"),
        ]);
        let records = sequence.records();

        assert_eq!(records[0].before(), None);
        assert_eq!(records[1].before(), None);
        assert_eq!(records[2].before(), Some(1));
        assert_eq!(records[1].next(), Some(2));
        assert_eq!(records[3].before(), Some(0));
        assert_eq!(records[0].next(), Some(3));
        assert_eq!(records[2].next(), None);
        assert_eq!(records[3].next(), None);
    }

    #[test]
    fn test_sibling_chain_never_crosses_shallower_level() {
        // Levels [1, 0, 1]: the second level-1 record must not link back
        // across the level-0 record.
        let sequence = Sequence::new(vec![
            record_at(1, "a"),
            record_at(0, "b"),
            record_at(1, "c"),
        ]);
        let records = sequence.records();

        assert_eq!(records[2].before(), None);
        assert_eq!(records[0].next(), None);
    }

    #[test]
    fn test_sibling_chain_skips_deeper_levels() {
        // Levels [1, 2, 2, 1]: the trailing level-1 record links over the
        // nested level-2 pair.
        let sequence = Sequence::new(vec![
            record_at(1, "a"),
            record_at(2, "b"),
            record_at(2, "c"),
            record_at(1, "d"),
        ]);
        let records = sequence.records();

        assert_eq!(records[3].before(), Some(0));
        assert_eq!(records[0].next(), Some(3));
    }

    #[test]
    fn test_min_level_of_empty_sequence_is_sentinel() {
        let sequence = Sequence::new(Vec::new());
        assert!(sequence.is_empty());
        assert_eq!(sequence.min_level(), LEVEL_MAX);
    }

    #[test]
    fn test_min_level_tracks_smallest_record() {
        let sequence = Sequence::new(vec![record_at(2, "a"), record_at(1, "b")]);
        assert_eq!(sequence.min_level(), 1);
    }

    #[test]
    fn test_rebuilding_resets_stale_links() {
        let first = Sequence::new(vec![record_at(0, "a"), record_at(0, "b")]);
        let mut records = first.into_records();
        records.swap(0, 1);
        let rebuilt = Sequence::new(records);

        assert_eq!(rebuilt.records()[0].label(), "b");
        assert_eq!(rebuilt.records()[0].seq_no(), 0);
        assert_eq!(rebuilt.records()[0].before(), None);
        assert_eq!(rebuilt.records()[1].before(), Some(0));
    }

    #[test]
    fn test_synthetic_data_record() {
        let record = LineRecord::synthetic_data("ledger", 3);
        assert_eq!(record.kind(), StatementKind::Data);
        assert_eq!(record.level(), 3);
        assert_eq!(record.label(), "ledger");
        assert_eq!(record.text(), "\\data ledger");
        assert!(record.inputs().is_empty());
        assert!(record.outputs().is_empty());
    }
}
