//! Error type for graph construction.

use thiserror::Error;

/// Errors aborting the construction of a graph.
///
/// No partial graph is returned once any of these occurs.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error on {name} - {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed alignment {name} - {reason}")]
    MalformedAlignment { name: String, reason: String },
    #[error("Alignment {0} contains no sequences")]
    EmptyAlignment(String),
    /// A k-mer produced by ingestion has no node during edge wiring.
    /// Indicates a construction defect, never bad input.
    #[error("k-mer {0:?} missing from node map during edge wiring")]
    MissingKmer(String),
    #[error("Invalid configuration - {0}")]
    InvalidConfig(String),
}

impl BuildError {
    /// Convenience constructor for MalformedAlignment
    pub fn malformed(name: &str, reason: impl Into<String>) -> Self {
        BuildError::MalformedAlignment {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
