//! Arena-backed k-mer graph with organism provenance.

use crate::model::kmer_index::KmerIndex;
use crate::model::node::{Node, NodeId};
use crate::model::organisms::OrganismId;
use crate::model::{EdgeRef, LabelledGraph};
use std::collections::{HashSet, VecDeque};
use std::ops::Index;

/// Terminator symbol appended to every linearized sequence.
pub const TERMINATOR: u8 = b'$';

/// Label of the distinguished root node.
pub const ROOT_LABEL: &str = "$";

// =#========================================================================#=
// KMER GRAPH
// =#========================================================================#=
/// A merged k-mer graph over several organisms, using the arena pattern on [Node].
///
/// # Structure
/// - Nodes are stored in a vector; a node's [NodeId] is its position
/// - A [KmerIndex] maps each k-mer to its single node
/// - The root is the node labelled `"$"`, shared by every organism
/// - Edges are stored on both ends (child and parent lists) and are
///   recorded at most once per ordered pair
///
/// # Example
/// ```
/// use kmertag::model::KmerGraph;
///
/// let mut graph = KmerGraph::new();
/// let (root, _) = graph.merge_kmer("$", 4, 0);
/// let (ac, created) = graph.merge_kmer("AC", 4, 0);
/// assert!(created);
/// let (_, created) = graph.merge_kmer("AC", 4, 1);
/// assert!(!created);
///
/// assert!(graph.add_edge(root, ac));
/// assert!(!graph.add_edge(root, ac)); // de-duplicated
/// assert_eq!(graph.num_edges(), 1);
/// assert_eq!(graph[ac].organisms().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KmerGraph {
    /// Nodes of this graph (arena pattern)
    nodes: Vec<Node>,
    /// Lookup from k-mer to node
    index: KmerIndex,
    /// Number of distinct directed edges
    num_edges: usize,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl KmerGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `organism` contains `kmer`.
    ///
    /// If the k-mer already has a node, the organism is added to that node's
    /// set (idempotent). Otherwise a new node with the next unused id is created.
    ///
    /// # Returns
    /// The node id and whether a new node was created.
    pub fn merge_kmer(&mut self, kmer: &str, column: usize, organism: OrganismId) -> (NodeId, bool) {
        if let Some(id) = self.index.get(kmer) {
            self.nodes[id].add_organism(organism);
            return (id, false);
        }

        let id = self.nodes.len();
        self.nodes.push(Node::new(id, kmer.to_string(), column, organism));
        self.index.insert(kmer, id);
        (id, true)
    }

    /// Adds the edge `parent -> child` unless it exists already.
    ///
    /// # Returns
    /// `true` if the edge was new.
    ///
    /// # Panics
    /// Panics if either id is not a node of this graph.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.nodes[parent].add_child(child) {
            return false;
        }
        self.nodes[child].add_parent(parent);
        self.num_edges += 1;
        true
    }

    /// Returns the node id of a k-mer, if present.
    pub fn id_of(&self, kmer: &str) -> Option<NodeId> {
        self.index.get(kmer)
    }

    /// Returns the node with the given id, if present.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns the node of a k-mer, if present.
    pub fn node_by_kmer(&self, kmer: &str) -> Option<&Node> {
        self.id_of(kmer).map(|id| &self.nodes[id])
    }

    /// Returns the id of the terminator root, if any organism was added.
    pub fn root(&self) -> Option<NodeId> {
        self.id_of(ROOT_LABEL)
    }

    /// Returns all nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct directed edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the edges reachable from the root in breadth-first order.
    ///
    /// Each dequeued node emits one edge per child, in child-list order.
    /// A child is enqueued the first time it is discovered, so every node is
    /// enqueued once and every reachable edge is emitted once. Queue and
    /// visited set live only for the duration of this call.
    ///
    /// Returns an empty vector if the graph has no root.
    pub fn bfs_edges(&self) -> Vec<(NodeId, NodeId)> {
        let Some(root) = self.root() else {
            return Vec::new();
        };

        let mut edges = Vec::with_capacity(self.num_edges);
        let mut visited = HashSet::with_capacity(self.nodes.len());
        let mut queue = VecDeque::new();
        visited.insert(root);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            for &child in self.nodes[current].children() {
                edges.push((current, child));
                if visited.insert(child) {
                    queue.push_back(child);
                }
            }
        }

        edges
    }
}

impl Index<NodeId> for KmerGraph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

impl LabelledGraph for KmerGraph {
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn out_edges(&self, node: usize) -> impl Iterator<Item = EdgeRef<'_>> {
        self.nodes[node].children().iter().map(|&child| {
            let target = &self.nodes[child];
            EdgeRef {
                target: child,
                symbol: target.leading_symbol(),
                organisms: target.organisms(),
            }
        })
    }
}
