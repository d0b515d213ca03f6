//! Aligned FASTA input, read through `bio::io::fasta`.

use crate::builder::BuildError;
use crate::model::kmer_graph::TERMINATOR;
use bio::io::fasta;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of a multiple sequence alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    /// Record identifier
    pub id: String,
    /// Aligned sequence, possibly containing gap symbols
    pub seq: String,
}

impl AlignedRow {
    pub fn new(id: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }
}

// =#========================================================================#=
// ALIGNMENT
// =#========================================================================#=
/// A multiple sequence alignment of one organism.
///
/// # Invariants
/// - At least one row
/// - All rows have the same (aligned) length
/// - Sequences are ASCII and do not contain the terminator `$`
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Name used in errors and logs, usually the file path
    name: String,
    rows: Vec<AlignedRow>,
    /// Number of alignment columns
    length: usize,
}

impl Alignment {
    /// Creates an alignment from rows, validating them.
    ///
    /// # Errors
    /// * [BuildError::EmptyAlignment] - if `rows` is empty
    /// * [BuildError::MalformedAlignment] - if rows differ in length, are not
    ///   ASCII, or contain the terminator symbol
    pub fn from_rows(name: impl Into<String>, rows: Vec<AlignedRow>) -> Result<Self, BuildError> {
        let name = name.into();
        let Some(first) = rows.first() else {
            return Err(BuildError::EmptyAlignment(name));
        };
        let length = first.seq.len();

        for row in &rows {
            if !row.seq.is_ascii() {
                return Err(BuildError::malformed(&name, format!("row {} is not ASCII", row.id)));
            }
            if row.seq.as_bytes().contains(&TERMINATOR) {
                return Err(BuildError::malformed(
                    &name,
                    format!("row {} contains terminator symbol '{}'", row.id, TERMINATOR as char),
                ));
            }
            if row.seq.len() != length {
                return Err(BuildError::malformed(
                    &name,
                    format!("row {} has length {}, expected {}", row.id, row.seq.len(), length),
                ));
            }
        }

        Ok(Self { name, rows, length })
    }

    /// Reads an aligned FASTA file.
    ///
    /// # Errors
    /// Returns a [BuildError] if the file cannot be opened or read, or if the
    /// records do not form a valid alignment (see [Alignment::from_rows]).
    pub fn from_fasta_file<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        let name = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|source| BuildError::Io {
            name: name.clone(),
            source,
        })?;
        Self::from_fasta_reader(name, file)
    }

    /// Reads aligned FASTA records from any reader.
    pub fn from_fasta_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, BuildError> {
        let name = name.into();
        let mut rows = Vec::new();

        for record in fasta::Reader::new(reader).records() {
            let record = record.map_err(|source| BuildError::Io {
                name: name.clone(),
                source,
            })?;
            record
                .check()
                .map_err(|reason| BuildError::malformed(&name, reason))?;
            let seq = String::from_utf8(record.seq().to_vec())
                .map_err(|_| BuildError::malformed(&name, format!("row {} is not ASCII", record.id())))?;
            rows.push(AlignedRow::new(record.id(), seq));
        }

        log::debug!("Read {} aligned rows from {}", rows.len(), name);
        Self::from_rows(name, rows)
    }

    /// Returns the alignment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of alignment columns.
    pub fn length(&self) -> usize {
        self.length
    }
}
