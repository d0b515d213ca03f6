//! Kmertag is a library to attribute sequencing reads to the organisms
//! they stem from, using a k-mer graph tagged with organism provenance.
//!
//! Core functionality provided:
//! - Ingest: Read one aligned FASTA file per organism, linearize its rows
//!   (gaps removed, terminator `$` appended) and cut them into windows.
//! - Builder: Merge the windows of all organisms into one [KmerGraph].
//!   Each node is a distinct k-mer and knows the set of organisms
//!   containing it. Edges follow consecutive windows of a row.
//! - Dot: Write the graph as a labelled edge list in breadth-first order
//!   from the root, and read such files back as an [EdgeGraph].
//! - Query: Find the organisms consistent with an exact occurrence of a
//!   read in the graph. Works on both graph forms.
//! - Classify / evaluate / simulate: Batch classification of FASTQ reads,
//!   scoring against simulated ground truth, and mock data generation.
//!
//! Limitations:
//! - Only exact matching; no mismatches or indels in reads
//! - Provenance is kept per node, not per edge
//!
//! # Usage patterns
//! 1. The quick API in this module and in [crate::dot] and
//!    [crate::builder] covers the common steps with default settings.
//! 2. Configure a [KmerGraphBuilder](crate::builder::KmerGraphBuilder) via
//!    [BuildConfig] and a [QueryEngine](crate::query::QueryEngine) for full
//!    control.
//!
//! ## Example
//! ```no_run
//! use kmertag::builder::BuildConfig;
//!
//! let graph = kmertag::build_graph(&["org0.fasta", "org1.fasta"], BuildConfig::new()).unwrap();
//! kmertag::dot::write_file("graph.dot", &graph).unwrap();
//!
//! let loaded = kmertag::load_graph("graph.dot").unwrap();
//! let organisms = kmertag::query_read(&loaded, "ACGT");
//! println!("ACGT -> {:?}", organisms);
//! ```

pub mod builder;
pub mod classify;
pub mod dot;
pub mod evaluate;
pub mod ingest;
pub mod model;
pub mod parser;
pub mod query;
pub mod simulate;

use crate::builder::{BuildConfig, BuildError};
use crate::model::{EdgeGraph, KmerGraph, LabelledGraph, OrganismSet};
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Builds a graph from aligned FASTA files, one organism per file.
///
/// See [`builder::build_from_files`] for full documentation.
pub fn build_graph<P: AsRef<Path>>(paths: &[P], config: BuildConfig) -> Result<KmerGraph, BuildError> {
    builder::build_from_files(paths, config)
}

/// Loads a serialized graph.
///
/// See [`dot::parse_file`] for full documentation.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<EdgeGraph, ParsingError> {
    dot::parse_file(path)
}

/// Returns the organisms consistent with an exact occurrence of `read`,
/// using breadth-first matching.
pub fn query_read<G: LabelledGraph, R: AsRef<[u8]>>(graph: &G, read: R) -> OrganismSet {
    query::QueryEngine::new(graph).query(read)
}
