//! Construction settings.

use crate::builder::build_error::BuildError;
use crate::ingest::AlignmentIngestor;

/// Default k-mer length
pub const DEFAULT_KMER_LEN: usize = 3;

/// Default number of alignment rows used per organism
pub const DEFAULT_MAX_ROWS: usize = 3;

// =#========================================================================#=
// BUILD CONFIG
// =#========================================================================#=
/// Settings for building a graph from alignments.
///
/// # Configuration
/// * `with_kmer_len(k)` - k-mer length; nodes hold windows of `k - 1` symbols.
///   `k = 2` gives the simplified graph whose nodes are single symbols.
/// * `with_max_seq_len(len)` - Cap on the gap-free length used per row
///   (default: uncapped)
/// * `with_max_rows(n)` - Number of alignment rows used per organism
///
/// # Example
/// ```
/// use kmertag::builder::BuildConfig;
///
/// let config = BuildConfig::new()
///     .with_kmer_len(5)
///     .with_max_seq_len(100)
///     .with_max_rows(1);
/// assert_eq!(config.window_len(), 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    kmer_len: usize,
    max_seq_len: Option<usize>,
    max_rows: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            kmer_len: DEFAULT_KMER_LEN,
            max_seq_len: None,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl BuildConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the k-mer length.
    pub fn with_kmer_len(mut self, kmer_len: usize) -> Self {
        self.kmer_len = kmer_len;
        self
    }

    /// Caps the gap-free sequence length used per row.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = Some(max_seq_len);
        self
    }

    /// Sets the number of alignment rows used per organism.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Returns the k-mer length.
    pub fn kmer_len(&self) -> usize {
        self.kmer_len
    }

    /// Returns the window length `k - 1` used for node labels.
    pub fn window_len(&self) -> usize {
        self.kmer_len.saturating_sub(1)
    }

    /// Returns the sequence length cap, if any.
    pub fn max_seq_len(&self) -> Option<usize> {
        self.max_seq_len
    }

    /// Returns the row cap.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Checks the settings.
    ///
    /// # Errors
    /// Returns [BuildError::InvalidConfig] if `k < 2` (empty windows)
    /// or no rows would be used.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.kmer_len < 2 {
            return Err(BuildError::InvalidConfig(format!(
                "k-mer length must be at least 2, got {}",
                self.kmer_len
            )));
        }
        if self.max_rows == 0 {
            return Err(BuildError::InvalidConfig(
                "at least one alignment row must be used".to_string(),
            ));
        }
        Ok(())
    }

    /// Creates the ingestor matching these settings.
    pub fn ingestor(&self) -> AlignmentIngestor {
        let ingestor = AlignmentIngestor::new(self.window_len()).with_max_rows(self.max_rows);
        match self.max_seq_len {
            Some(len) => ingestor.with_max_seq_len(len),
            None => ingestor,
        }
    }
}
