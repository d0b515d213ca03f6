//! Node module for the k-mer graph.

use crate::model::organisms::{OrganismId, OrganismSet};

/// Index of a node in a [KmerGraph](crate::model::KmerGraph) arena.
///
/// Equal to the node's id: ids are assigned in creation order and never reused.
pub type NodeId = usize;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A k-mer node in the shared graph.
///
/// # Invariants
/// - `label` is non-empty (enforced); its first byte is the symbol written
///   on every edge entering this node
/// - `organisms` is non-empty and only grows
/// - `children` and `parents` are insertion-ordered and free of duplicates
/// - `column` is the alignment length of the creating organism; layout only
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique id, equal to the arena index
    id: NodeId,
    /// k-mer string
    label: String,
    /// Alignment column count, kept for layout
    column: usize,
    /// Organisms whose sequences contain this k-mer
    organisms: OrganismSet,
    /// Successor k-mers
    children: Vec<NodeId>,
    /// Predecessor k-mers
    parents: Vec<NodeId>,
}

impl Node {
    /// Creates a new node observed in a single organism.
    ///
    /// # Arguments
    /// * `id` - The unique id of this node in the graph (arena)
    /// * `label` - The k-mer string
    /// * `column` - Alignment length of the creating organism
    /// * `organism` - The organism the k-mer was first observed in
    ///
    /// # Panics
    /// Panics if `label` is empty.
    pub fn new(id: NodeId, label: String, column: usize, organism: OrganismId) -> Self {
        assert!(!label.is_empty(), "Node label must be non-empty");
        Node {
            id,
            label,
            column,
            organisms: OrganismSet::from([organism]),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the k-mer label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the first symbol of the label.
    pub fn leading_symbol(&self) -> u8 {
        self.label.as_bytes()[0]
    }

    /// Returns the column (layout) attribute.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the organisms this k-mer was observed in.
    pub fn organisms(&self) -> &OrganismSet {
        &self.organisms
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the parents in insertion order.
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// Adds an organism, returning `true` if it was not present yet.
    pub fn add_organism(&mut self, organism: OrganismId) -> bool {
        self.organisms.insert(organism)
    }

    /// Adds a child unless already present, returning whether it was added.
    pub fn add_child(&mut self, child: NodeId) -> bool {
        if self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Adds a parent unless already present, returning whether it was added.
    pub fn add_parent(&mut self, parent: NodeId) -> bool {
        if self.parents.contains(&parent) {
            return false;
        }
        self.parents.push(parent);
        true
    }
}
