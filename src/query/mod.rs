//! Exact read matching against a labelled graph.
//!
//! A read matches a path whose edge symbols spell it exactly. Paths may
//! start at any node. Along the path the organism sets of the edges are
//! intersected; a path whose intersection becomes empty is abandoned.
//!
//! # Strategies
//! * [MatchStrategy::BreadthFirst] - reference algorithm: all live
//!   candidates are extended one read symbol at a time
//! * [MatchStrategy::BranchResuming] - depth-first walk that stores a resume
//!   point at every branching node so a failed path continues from the
//!   last branch instead of from a new seed
//!
//! Both return the same set for every graph and read.
//!
//! # Result
//! The returned [OrganismSet] is empty for an unrecognised read, has one
//! member for a confident attribution, and several for an ambiguous one
//! (see [Classification]). Queries never fail.
//!
//! # Example
//! ```
//! use kmertag::builder::{BuildConfig, KmerGraphBuilder};
//! use kmertag::ingest::{AlignedRow, Alignment};
//! use kmertag::query::QueryEngine;
//!
//! let mut builder = KmerGraphBuilder::new(BuildConfig::new()).unwrap();
//! builder.add_alignment(&Alignment::from_rows("org0", vec![AlignedRow::new("r", "ACGT")]).unwrap()).unwrap();
//! builder.add_alignment(&Alignment::from_rows("org1", vec![AlignedRow::new("r", "ACGA")]).unwrap()).unwrap();
//! let graph = builder.finish();
//!
//! let engine = QueryEngine::new(&graph);
//! assert_eq!(engine.query("ACGT").into_iter().collect::<Vec<_>>(), [0]);
//! assert!(engine.query("TTTT").is_empty());
//! ```

mod bfs;
mod dfs;

pub use self::bfs::match_breadth_first;
pub use self::dfs::match_branch_resuming;

use crate::model::{LabelledGraph, OrganismId, OrganismSet};

/// Algorithm used to match reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Breadth-first incremental extension of all candidates
    #[default]
    BreadthFirst,
    /// Depth-first walk resuming at stored branch points
    BranchResuming,
}

// =#========================================================================#=
// QUERY ENGINE
// =#========================================================================#=
/// Matches reads against a shared, read-only graph.
///
/// The engine only borrows the graph, so any number of engines may query
/// the same graph at once.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'g, G: LabelledGraph> {
    graph: &'g G,
    strategy: MatchStrategy,
}

impl<'g, G: LabelledGraph> QueryEngine<'g, G> {
    /// Creates an engine using [MatchStrategy::BreadthFirst].
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            strategy: MatchStrategy::default(),
        }
    }

    /// Selects the matching algorithm.
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the selected algorithm.
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Returns the organisms consistent with an exact occurrence of `read`.
    pub fn query<R: AsRef<[u8]>>(&self, read: R) -> OrganismSet {
        match self.strategy {
            MatchStrategy::BreadthFirst => match_breadth_first(self.graph, read.as_ref()),
            MatchStrategy::BranchResuming => match_branch_resuming(self.graph, read.as_ref()),
        }
    }

    /// Matches `read` and classifies the result.
    pub fn classify<R: AsRef<[u8]>>(&self, read: R) -> Classification {
        Classification::from(self.query(read))
    }
}

// =#========================================================================#=
// CLASSIFICATION
// =#========================================================================#=
/// Interpretation of a query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No organism matches the read
    Unrecognized,
    /// Exactly one organism matches the read
    Unique(OrganismId),
    /// Several organisms match the read
    Ambiguous(OrganismSet),
}

impl From<OrganismSet> for Classification {
    fn from(organisms: OrganismSet) -> Self {
        match organisms.len() {
            0 => Classification::Unrecognized,
            1 => match organisms.first() {
                Some(&id) => Classification::Unique(id),
                None => Classification::Unrecognized,
            },
            _ => Classification::Ambiguous(organisms),
        }
    }
}

/// Combines the organism sets of all full matches.
///
/// Matches are expected to agree; if they do not, their union is returned
/// and the divergence is logged.
pub(crate) fn resolve_matches<'a, I>(read: &[u8], sets: I) -> OrganismSet
where
    I: IntoIterator<Item = &'a OrganismSet>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return OrganismSet::new();
    };

    let mut result = first.clone();
    let mut diverged = false;
    for set in sets {
        if set != first {
            diverged = true;
            result.extend(set.iter().copied());
        }
    }

    if diverged {
        log::warn!(
            "Read {} matched paths with differing organism sets, returning union {:?}",
            String::from_utf8_lossy(read),
            result
        );
    }
    result
}
