//! Graph construction from per-organism alignments.
//!
//! [KmerGraphBuilder] accumulates organisms into one shared [KmerGraph],
//! organism ids being assigned `0, 1, 2, ...` in the order alignments are
//! added.
//!
//! # Quick API
//! * [build_from_files] - builds a graph from aligned FASTA files
//!
//! # Example
//! ```
//! use kmertag::builder::{BuildConfig, KmerGraphBuilder};
//! use kmertag::ingest::{AlignedRow, Alignment};
//!
//! let org0 = Alignment::from_rows("org0", vec![AlignedRow::new("r", "ACGT")]).unwrap();
//! let org1 = Alignment::from_rows("org1", vec![AlignedRow::new("r", "ACGA")]).unwrap();
//!
//! let mut builder = KmerGraphBuilder::new(BuildConfig::new().with_kmer_len(3)).unwrap();
//! builder.add_alignment(&org0).unwrap();
//! builder.add_alignment(&org1).unwrap();
//! let graph = builder.finish();
//!
//! let cg = graph.node_by_kmer("CG").unwrap();
//! assert_eq!(cg.organisms().iter().copied().collect::<Vec<_>>(), [0, 1]);
//! ```

mod build_error;
mod config;
mod graph_builder;

pub use self::build_error::BuildError;
pub use self::config::{BuildConfig, DEFAULT_KMER_LEN, DEFAULT_MAX_ROWS};
pub use self::graph_builder::KmerGraphBuilder;

use crate::model::KmerGraph;
use std::path::Path;

/// Builds a graph from aligned FASTA files, one organism per file.
///
/// Organism ids follow the order of `paths`.
///
/// # Errors
/// Any unreadable or malformed alignment aborts the whole build.
pub fn build_from_files<P: AsRef<Path>>(paths: &[P], config: BuildConfig) -> Result<KmerGraph, BuildError> {
    let mut builder = KmerGraphBuilder::new(config)?;
    for path in paths {
        builder.add_alignment_file(path)?;
    }
    Ok(builder.finish())
}
