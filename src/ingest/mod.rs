//! Alignment ingestion: reading per-organism alignments and turning their
//! rows into ordered k-mer windows.
//!
//! # Quick API
//! * [read_alignment] - reads an aligned FASTA file into an [Alignment]
//!
//! # Processing
//! For each row up to the row cap, [AlignmentIngestor] strips gap symbols,
//! truncates to the configured length, appends the terminator `$`, and slides
//! a window of `k - 1` symbols over the result. Windows near the end are
//! shorter, the last one being `"$"` itself:
//!
//! ```text
//! row "AC-GT", k = 3  ->  "ACGT$"  ->  AC, CG, GT, T$, $
//! ```

mod alignment;
mod linearize;

pub use self::alignment::{AlignedRow, Alignment};
pub use self::linearize::{AlignmentIngestor, IngestedOrganism, LinearRow, linearize, windows};

use crate::builder::BuildError;
use std::path::Path;

/// Alignment gap symbols removed before windowing
pub const GAP_SYMBOLS: &[u8] = b"-.";

/// Reads an aligned FASTA file.
///
/// See [Alignment::from_fasta_file] for the validation performed.
pub fn read_alignment<P: AsRef<Path>>(path: P) -> Result<Alignment, BuildError> {
    Alignment::from_fasta_file(path)
}
