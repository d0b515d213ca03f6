//! Breadth-first reference matcher.

use crate::model::{LabelledGraph, OrganismSet};
use crate::query::resolve_matches;
use std::collections::BTreeSet;

/// A partial match: the node reached and the organisms still consistent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    node: usize,
    organisms: OrganismSet,
}

/// Matches `read` by extending all candidates one symbol at a time.
///
/// 1. Every edge whose symbol is `read[0]` seeds a candidate carrying the
///    edge's organism set.
/// 2. For each further symbol, a candidate follows each outgoing edge with
///    that symbol whose organism set intersects the carried set; the
///    carried set becomes the intersection.
/// 3. If no candidate survives, the result is empty.
///
/// Candidates at the same node with the same set are kept once, as they
/// extend identically.
pub fn match_breadth_first<G: LabelledGraph>(graph: &G, read: &[u8]) -> OrganismSet {
    let Some((&first, rest)) = read.split_first() else {
        return OrganismSet::new();
    };

    let mut candidates: BTreeSet<Candidate> = (0..graph.num_nodes())
        .flat_map(|node| graph.out_edges(node))
        .filter(|edge| edge.symbol == first)
        .map(|edge| Candidate {
            node: edge.target,
            organisms: edge.organisms.clone(),
        })
        .collect();

    for (offset, &symbol) in rest.iter().enumerate() {
        if candidates.is_empty() {
            break;
        }
        log::trace!("Position {}: {} live candidates", offset + 1, candidates.len());

        candidates = candidates
            .iter()
            .flat_map(|candidate| {
                graph
                    .out_edges(candidate.node)
                    .filter(move |edge| edge.symbol == symbol)
                    .filter_map(move |edge| {
                        let organisms: OrganismSet = candidate
                            .organisms
                            .intersection(edge.organisms)
                            .copied()
                            .collect();
                        (!organisms.is_empty()).then_some(Candidate {
                            node: edge.target,
                            organisms,
                        })
                    })
            })
            .collect();
    }

    resolve_matches(read, candidates.iter().map(|candidate| &candidate.organisms))
}
