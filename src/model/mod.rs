//! Data model for organism-tagged k-mer graphs.
//!
//! # Graph representations
//! Two graph types share the [LabelledGraph] view used by the query engine:
//!
//! | Type | Built by | Node key | Use case |
//! |------|----------|----------|----------|
//! | [KmerGraph] | [KmerGraphBuilder](crate::builder::KmerGraphBuilder) | k-mer label | Construction, serialization |
//! | [EdgeGraph] | [DotParser](crate::dot::DotParser) | textual id `S<n>` | Querying a reloaded graph |
//!
//! Both use the arena pattern: nodes live in a vector and refer to each
//! other by index only ([NodeId]), so organisms converging on the same
//! k-mer never create ownership cycles.
//!
//! # Provenance
//! Every node carries an [OrganismSet]. An edge is labelled with the
//! leading symbol of its destination and the destination's full organism
//! set, so provenance is tracked per k-mer and not per transition.

pub mod edge_graph;
pub mod kmer_graph;
pub mod kmer_index;
pub mod node;
pub mod organisms;

pub use edge_graph::{Edge, EdgeGraph, EdgeLabel};
pub use kmer_graph::KmerGraph;
pub use kmer_index::KmerIndex;
pub use node::{Node, NodeId};
pub use organisms::{OrganismId, OrganismSet, join_organisms};

// =#========================================================================#=
// LABELLED GRAPH (trait)
// =#========================================================================#=
/// Read-only view of a graph whose edges carry a symbol and an organism set.
///
/// This is the seam between graph storage and the query engine: the matcher
/// only needs to enumerate nodes and walk outgoing edges in a fixed order.
pub trait LabelledGraph {
    /// Number of nodes; nodes are addressed as `0..num_nodes()`.
    fn num_nodes(&self) -> usize;

    /// Outgoing edges of `node` in their stored order.
    fn out_edges(&self, node: usize) -> impl Iterator<Item = EdgeRef<'_>>;
}

/// Borrowed view of one labelled edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a> {
    /// Destination node
    pub target: usize,
    /// Leading symbol of the destination k-mer
    pub symbol: u8,
    /// Organisms attributed to the destination k-mer
    pub organisms: &'a OrganismSet,
}
