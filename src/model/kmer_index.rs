//! Lookup from k-mer strings to node ids.

use crate::model::node::NodeId;
use std::collections::HashMap;

// =#========================================================================#=
// KMER INDEX
// =#========================================================================#=
/// Maps k-mer strings to the [NodeId] of the node that owns them.
///
/// Only used during construction to detect merges: every k-mer maps to
/// exactly one node across all organisms.
///
/// # Example
/// ```
/// use kmertag::model::KmerIndex;
///
/// let mut index = KmerIndex::new();
/// assert_eq!(index.insert("AC", 0), None);
/// assert_eq!(index.get("AC"), Some(0));
/// assert!(!index.contains("CG"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KmerIndex {
    map: HashMap<String, NodeId>,
}

impl KmerIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a k-mer, returning the previously mapped id if any.
    pub fn insert(&mut self, kmer: &str, id: NodeId) -> Option<NodeId> {
        self.map.insert(kmer.to_string(), id)
    }

    /// Retrieves the node id for a given k-mer.
    pub fn get(&self, kmer: &str) -> Option<NodeId> {
        self.map.get(kmer).copied()
    }

    /// Checks if a k-mer is indexed.
    pub fn contains(&self, kmer: &str) -> bool {
        self.map.contains_key(kmer)
    }

    /// Returns the number of indexed k-mers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
