//! Node merging and edge wiring.

use crate::builder::build_error::BuildError;
use crate::builder::config::BuildConfig;
use crate::ingest::{Alignment, AlignmentIngestor, IngestedOrganism};
use crate::model::kmer_graph::ROOT_LABEL;
use crate::model::{KmerGraph, NodeId, OrganismId};
use std::path::Path;

// =#========================================================================#=
// KMER GRAPH BUILDER
// =#========================================================================#=
/// Merges organisms into one shared [KmerGraph].
///
/// Each organism is added in two passes:
/// 1. **Merge**: every distinct k-mer of the organism, in lexicographic
///    order, either joins an existing node (adding the organism id) or
///    creates a node with the next unused id.
/// 2. **Wire**: every row is walked in sequence order and each consecutive
///    pair `(previous, current)` becomes the edge `previous -> current`.
///    Rows are treated as circular: the walk starts at the root `"$"`, so
///    the root leads to every row's first k-mer.
///
/// Edges are de-duplicated, so a transition seen in several rows or
/// organisms is stored once.
#[derive(Debug)]
pub struct KmerGraphBuilder {
    config: BuildConfig,
    ingestor: AlignmentIngestor,
    graph: KmerGraph,
    next_organism: OrganismId,
}

impl KmerGraphBuilder {
    /// Creates a builder for the given settings.
    ///
    /// # Errors
    /// Returns [BuildError::InvalidConfig] if the settings are invalid.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self {
            ingestor: config.ingestor(),
            config,
            graph: KmerGraph::new(),
            next_organism: 0,
        })
    }

    /// Returns the settings of this builder.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Returns the graph built so far.
    pub fn graph(&self) -> &KmerGraph {
        &self.graph
    }

    /// Returns the number of organisms added so far.
    pub fn num_organisms(&self) -> usize {
        self.next_organism as usize
    }

    /// Reads an aligned FASTA file and adds it as the next organism.
    ///
    /// # Returns
    /// The organism id assigned to this file.
    pub fn add_alignment_file<P: AsRef<Path>>(&mut self, path: P) -> Result<OrganismId, BuildError> {
        let alignment = Alignment::from_fasta_file(path)?;
        self.add_alignment(&alignment)
    }

    /// Adds an alignment as the next organism.
    ///
    /// # Returns
    /// The organism id assigned to this alignment.
    pub fn add_alignment(&mut self, alignment: &Alignment) -> Result<OrganismId, BuildError> {
        let organism_id = self.next_organism;
        let organism = self.ingestor.ingest(alignment);
        log::info!(
            "Adding organism {} from {} ({} of {} rows)",
            organism_id,
            alignment.name(),
            organism.rows.len(),
            alignment.num_rows()
        );

        self.add_organism(organism_id, &organism)?;
        self.next_organism += 1;
        Ok(organism_id)
    }

    /// Consumes the builder and returns the finished graph.
    pub fn finish(self) -> KmerGraph {
        log::debug!(
            "Finished graph: {} organisms, {} nodes, {} edges",
            self.next_organism,
            self.graph.num_nodes(),
            self.graph.num_edges()
        );
        self.graph
    }
}

// ============================================================================
// Passes (private)
// ============================================================================
impl KmerGraphBuilder {
    fn add_organism(&mut self, organism_id: OrganismId, organism: &IngestedOrganism) -> Result<(), BuildError> {
        let (created, merged) = self.merge_kmers(organism_id, organism);
        log::debug!("Organism {}: {} new nodes, {} merged nodes", organism_id, created, merged);

        let edges_before = self.graph.num_edges();
        self.wire_edges(organism)?;
        log::debug!(
            "Organism {}: {} new edges",
            organism_id,
            self.graph.num_edges() - edges_before
        );
        Ok(())
    }

    /// Pass 1, returning the number of created and merged nodes.
    fn merge_kmers(&mut self, organism_id: OrganismId, organism: &IngestedOrganism) -> (usize, usize) {
        let mut created = 0;
        let mut merged = 0;
        for kmer in organism.distinct_kmers() {
            if self.graph.merge_kmer(kmer, organism.column, organism_id).1 {
                created += 1;
            } else {
                merged += 1;
            }
        }
        (created, merged)
    }

    /// Pass 2.
    fn wire_edges(&mut self, organism: &IngestedOrganism) -> Result<(), BuildError> {
        let root = self.lookup(ROOT_LABEL)?;

        for row in &organism.rows {
            // A row that is empty after gap removal only holds the terminator
            if row.kmers.len() < 2 {
                log::warn!("Skipping edge wiring for empty row");
                continue;
            }

            let mut previous = root;
            for kmer in &row.kmers {
                let current = self.lookup(kmer)?;
                self.graph.add_edge(previous, current);
                previous = current;
            }
        }

        Ok(())
    }

    fn lookup(&self, kmer: &str) -> Result<NodeId, BuildError> {
        self.graph
            .id_of(kmer)
            .ok_or_else(|| BuildError::MissingKmer(kmer.to_string()))
    }
}
