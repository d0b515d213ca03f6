//! Batch classification of sequencing reads.
//!
//! Reads are loaded from FASTQ through `bio::io::fastq` and each is matched
//! against a graph with a [QueryEngine]. The result is one [Prediction] per
//! read, in input order.
//!
//! # Quick API
//! * [read_fastq] - loads all records of a FASTQ file
//! * [classify_fastq] - loads and classifies a FASTQ file in one go

use crate::model::{LabelledGraph, OrganismSet};
use crate::query::{Classification, MatchStrategy, QueryEngine};
use bio::io::fastq;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors while loading reads.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error on {name} - {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed FASTQ record {id} - {reason}")]
    MalformedRecord { id: String, reason: String },
}

/// A sequencing read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

impl ReadRecord {
    /// Creates a new read.
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }
}

/// Loads all records of a FASTQ file.
///
/// # Errors
/// Returns a [ReadError] if the file cannot be read or a record is invalid
/// (for example sequence and quality of different length).
pub fn read_fastq<P: AsRef<Path>>(path: P) -> Result<Vec<ReadRecord>, ReadError> {
    let name = path.as_ref().display().to_string();
    let file = File::open(path.as_ref()).map_err(|source| ReadError::Io {
        name: name.clone(),
        source,
    })?;
    let reads = read_fastq_from(&name, file)?;
    log::info!("Loaded {} reads from {}", reads.len(), name);
    Ok(reads)
}

/// Loads all FASTQ records from a reader.
///
/// `name` is only used in error messages.
pub fn read_fastq_from<R: Read>(name: &str, reader: R) -> Result<Vec<ReadRecord>, ReadError> {
    fastq::Reader::new(reader)
        .records()
        .map(|record| {
            let record = record.map_err(|e| ReadError::MalformedRecord {
                id: format!("in {name}"),
                reason: e.to_string(),
            })?;
            record.check().map_err(|reason| ReadError::MalformedRecord {
                id: record.id().to_string(),
                reason: reason.to_string(),
            })?;
            Ok(ReadRecord::new(record.id(), record.seq()))
        })
        .collect()
}

// =#========================================================================#=
// CLASSIFIER
// =#========================================================================#=
/// Organisms attributed to one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub read_id: String,
    pub organisms: OrganismSet,
}

impl Prediction {
    /// Interprets the organism set.
    pub fn classification(&self) -> Classification {
        Classification::from(self.organisms.clone())
    }
}

/// Predictions for a batch of reads.
#[derive(Debug, Clone, Default)]
pub struct ClassificationReport {
    /// One prediction per read, in input order
    pub predictions: Vec<Prediction>,
    /// Number of reads matched by at least one organism
    pub recognized: usize,
}

impl ClassificationReport {
    /// Returns the number of classified reads.
    pub fn total(&self) -> usize {
        self.predictions.len()
    }
}

/// Classifies reads against a graph.
///
/// # Example
/// ```
/// use kmertag::classify::{Classifier, ReadRecord};
///
/// let graph = kmertag::dot::parse_str("strict digraph {\n\tS0 -> S1 [ label = \"A (0)\" ];\n}").unwrap();
/// let report = Classifier::new(&graph).classify_all(&[ReadRecord::new("r0", "A"), ReadRecord::new("r1", "C")]);
///
/// assert_eq!(report.recognized, 1);
/// assert!(report.predictions[1].organisms.is_empty());
/// ```
pub struct Classifier<'g, G: LabelledGraph> {
    engine: QueryEngine<'g, G>,
}

impl<'g, G: LabelledGraph> Classifier<'g, G> {
    /// Creates a classifier using breadth-first matching.
    pub fn new(graph: &'g G) -> Self {
        Self {
            engine: QueryEngine::new(graph),
        }
    }

    /// Selects the matching algorithm.
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.engine = self.engine.with_strategy(strategy);
        self
    }

    /// Classifies a single read.
    pub fn classify(&self, read: &ReadRecord) -> Prediction {
        let organisms = self.engine.query(&read.seq);
        log::debug!("Read {} -> {:?}", read.id, organisms);
        Prediction {
            read_id: read.id.clone(),
            organisms,
        }
    }

    /// Classifies reads in order.
    pub fn classify_all(&self, reads: &[ReadRecord]) -> ClassificationReport {
        let predictions: Vec<Prediction> = reads.iter().map(|read| self.classify(read)).collect();
        let recognized = predictions.iter().filter(|p| !p.organisms.is_empty()).count();
        log::info!("Recognized {} of {} reads", recognized, predictions.len());
        ClassificationReport { predictions, recognized }
    }
}

/// Loads a FASTQ file and classifies every read.
///
/// # Errors
/// Returns a [ReadError] if the file cannot be loaded.
pub fn classify_fastq<G: LabelledGraph, P: AsRef<Path>>(
    graph: &G,
    path: P,
    strategy: MatchStrategy,
) -> Result<ClassificationReport, ReadError> {
    let reads = read_fastq(path)?;
    Ok(Classifier::new(graph).with_strategy(strategy).classify_all(&reads))
}
