//! Linearization of alignment rows and k-mer windowing.

use crate::ingest::GAP_SYMBOLS;
use crate::ingest::alignment::Alignment;
use crate::model::kmer_graph::TERMINATOR;
use std::collections::BTreeSet;

/// One linearized row and its windows in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRow {
    /// Gap-free, capped sequence ending in the terminator
    pub sequence: String,
    /// Windows starting at positions `0..=sequence.len() - 1`
    pub kmers: Vec<String>,
}

/// Ingestion result for one organism.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedOrganism {
    /// Alignment column count (layout attribute of created nodes)
    pub column: usize,
    /// Rows in alignment order
    pub rows: Vec<LinearRow>,
}

impl IngestedOrganism {
    /// Returns the distinct k-mers of all rows in lexicographic order.
    ///
    /// Node ids are assigned in this order, which makes construction
    /// reproducible across runs.
    pub fn distinct_kmers(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.kmers.iter().map(|kmer| kmer.as_str()))
            .collect()
    }
}

// =#========================================================================#=
// ALIGNMENT INGESTOR
// =#========================================================================#=
/// Turns one organism's alignment into linearized rows and k-mer windows.
///
/// # Example
/// ```
/// use kmertag::ingest::{AlignedRow, Alignment, AlignmentIngestor};
///
/// let alignment = Alignment::from_rows("org0", vec![AlignedRow::new("r0", "AC-GT")]).unwrap();
/// let organism = AlignmentIngestor::new(2).ingest(&alignment);
///
/// assert_eq!(organism.rows[0].sequence, "ACGT$");
/// assert_eq!(organism.rows[0].kmers, ["AC", "CG", "GT", "T$", "$"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentIngestor {
    window_len: usize,
    max_rows: usize,
    max_seq_len: Option<usize>,
}

impl AlignmentIngestor {
    /// Creates an ingestor using all rows at full length.
    ///
    /// # Arguments
    /// * `window_len` - Window length `k - 1`; must be positive
    pub fn new(window_len: usize) -> Self {
        assert!(window_len > 0, "Window length must be positive");
        Self {
            window_len,
            max_rows: usize::MAX,
            max_seq_len: None,
        }
    }

    /// Limits the number of rows used.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Caps the gap-free length used per row.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = Some(max_seq_len);
        self
    }

    /// Linearizes up to `max_rows` rows and computes their windows.
    ///
    /// Alignments with fewer rows than the cap use all of them; rows shorter
    /// than the length cap use their own full length.
    pub fn ingest(&self, alignment: &Alignment) -> IngestedOrganism {
        let rows = alignment
            .rows()
            .iter()
            .take(self.max_rows)
            .map(|row| {
                let sequence = linearize(&row.seq, self.max_seq_len);
                let kmers = windows(&sequence, self.window_len);
                LinearRow { sequence, kmers }
            })
            .collect();

        IngestedOrganism {
            column: alignment.length(),
            rows,
        }
    }
}

/// Removes gap symbols, truncates to `max_len` symbols if given, and
/// appends the terminator.
///
/// # Example
/// ```
/// use kmertag::ingest::linearize;
///
/// assert_eq!(linearize("A-C.GT", None), "ACGT$");
/// assert_eq!(linearize("A-C.GT", Some(2)), "AC$");
/// assert_eq!(linearize("ACGT", Some(10)), "ACGT$");
/// ```
pub fn linearize(aligned: &str, max_len: Option<usize>) -> String {
    let mut sequence: String = aligned
        .chars()
        .filter(|c| !c.is_ascii() || !GAP_SYMBOLS.contains(&(*c as u8)))
        .collect();

    if let Some(max_len) = max_len {
        sequence.truncate(max_len.min(sequence.len()));
    }
    sequence.push(TERMINATOR as char);
    sequence
}

/// Slides a window of `window_len` symbols over an ASCII sequence.
///
/// One window is produced per start position, so windows near the end are
/// shorter than `window_len`.
///
/// # Example
/// ```
/// use kmertag::ingest::windows;
///
/// assert_eq!(windows("ACGA$", 3), ["ACG", "CGA", "GA$", "A$", "$"]);
/// ```
pub fn windows(sequence: &str, window_len: usize) -> Vec<String> {
    (0..sequence.len())
        .map(|start| {
            let end = (start + window_len).min(sequence.len());
            sequence[start..end].to_string()
        })
        .collect()
}
