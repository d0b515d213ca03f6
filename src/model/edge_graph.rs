//! Directed edge-list graph as loaded from the textual format.

use crate::model::kmer_graph::KmerGraph;
use crate::model::organisms::{OrganismSet, join_organisms};
use crate::model::{EdgeRef, LabelledGraph};
use std::collections::HashMap;
use std::fmt;

/// Prefix of textual node ids (`S0`, `S1`, ...).
pub const NODE_ID_PREFIX: char = 'S';

// =#========================================================================#=
// EDGE LABEL
// =#========================================================================#=
/// Label of a serialized edge: destination symbol plus organism set.
///
/// Displays as `A (0,1)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeLabel {
    /// Leading symbol of the destination k-mer
    pub symbol: u8,
    /// Organisms of the destination k-mer
    pub organisms: OrganismSet,
}

impl EdgeLabel {
    /// Creates a new edge label.
    pub fn new(symbol: u8, organisms: OrganismSet) -> Self {
        Self { symbol, organisms }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.symbol as char, join_organisms(&self.organisms))
    }
}

/// A directed, labelled edge between two node indices of an [EdgeGraph].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub label: EdgeLabel,
}

// =#========================================================================#=
// EDGE GRAPH
// =#========================================================================#=
/// A directed graph keyed by textual node id, with labelled edges.
///
/// Node names (`S<n>`) are mapped to dense indices in order of first
/// appearance, so the source of the first edge read is index `0`, which
/// for files written by [crate::dot] is the terminator root. Outgoing
/// edges keep their order of appearance in the file.
///
/// # Example
/// ```
/// use kmertag::model::{EdgeGraph, EdgeLabel, OrganismSet};
///
/// let mut graph = EdgeGraph::new();
/// let root = graph.get_or_insert_node("S0");
/// let ac = graph.get_or_insert_node("S1");
/// graph.add_edge(root, ac, EdgeLabel::new(b'A', OrganismSet::from([0, 1])));
///
/// assert_eq!(graph.root(), Some(root));
/// assert_eq!(graph.edges()[0].label.to_string(), "A (0,1)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeGraph {
    /// Node names by index
    names: Vec<String>,
    /// Lookup from node name to index
    index: HashMap<String, usize>,
    /// All edges in order of insertion
    edges: Vec<Edge>,
    /// Per node: indices into `edges` of outgoing edges
    out: Vec<Vec<usize>>,
}

impl EdgeGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of a named node, inserting it if new.
    pub fn get_or_insert_node(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }

        let idx = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.out.push(Vec::new());
        idx
    }

    /// Adds an edge between two existing node indices.
    ///
    /// # Panics
    /// Panics if `source` is not a node index of this graph.
    pub fn add_edge(&mut self, source: usize, target: usize, label: EdgeLabel) {
        self.out[source].push(self.edges.len());
        self.edges.push(Edge { source, target, label });
    }

    /// Returns the index of a node name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the name of a node index, if present.
    pub fn node_name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(|s| s.as_str())
    }

    /// Returns the traversal root: the first node seen, if any.
    pub fn root(&self) -> Option<usize> {
        if self.names.is_empty() { None } else { Some(0) }
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the outgoing edges of a node in insertion order.
    pub fn edges_from(&self, idx: usize) -> impl Iterator<Item = &Edge> {
        self.out[idx].iter().map(|&e| &self.edges[e])
    }

    /// Returns true if an edge `source -> target` exists, regardless of its label.
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.edges_from(source).any(|e| e.target == target)
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the edges as sorted `(source name, target name, label)` triples.
    ///
    /// Two graphs with equal triples have the same node set (restricted to
    /// nodes incident to an edge), edge set, and edge labels.
    pub fn labelled_edges(&self) -> Vec<(&str, &str, &EdgeLabel)> {
        let mut triples: Vec<_> = self
            .edges
            .iter()
            .map(|e| (self.names[e.source].as_str(), self.names[e.target].as_str(), &e.label))
            .collect();
        triples.sort();
        triples
    }

    /// Returns the sorted multiset of edge labels.
    pub fn label_multiset(&self) -> Vec<&EdgeLabel> {
        let mut labels: Vec<_> = self.edges.iter().map(|e| &e.label).collect();
        labels.sort();
        labels
    }
}

impl From<&KmerGraph> for EdgeGraph {
    /// Converts a [KmerGraph] into the form a reload of its serialization
    /// would produce: same traversal order, node names `S<id>`.
    fn from(graph: &KmerGraph) -> Self {
        let mut edge_graph = EdgeGraph::new();
        for (parent, child) in graph.bfs_edges() {
            let source = edge_graph.get_or_insert_node(&format!("{NODE_ID_PREFIX}{parent}"));
            let target = edge_graph.get_or_insert_node(&format!("{NODE_ID_PREFIX}{child}"));
            let child = &graph[child];
            let label = EdgeLabel::new(child.leading_symbol(), child.organisms().clone());
            edge_graph.add_edge(source, target, label);
        }
        edge_graph
    }
}

impl LabelledGraph for EdgeGraph {
    fn num_nodes(&self) -> usize {
        self.names.len()
    }

    fn out_edges(&self, node: usize) -> impl Iterator<Item = EdgeRef<'_>> {
        self.edges_from(node).map(|edge| EdgeRef {
            target: edge.target,
            symbol: edge.label.symbol,
            organisms: &edge.label.organisms,
        })
    }
}
