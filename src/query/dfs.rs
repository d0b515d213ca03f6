//! Depth-first matcher resuming at branch points.

use crate::model::{LabelledGraph, OrganismSet};
use crate::query::resolve_matches;

/// Where to continue after a path fails: node reached, next read position,
/// and the organisms carried so far.
#[derive(Debug)]
struct ResumePoint {
    node: usize,
    position: usize,
    organisms: OrganismSet,
}

/// Matches `read` by walking one path at a time.
///
/// Seeds are visited in node order. While walking, a node with several
/// matching outgoing edges pushes a resume point for every edge but the
/// first, so when the current path dies the walk continues at the most
/// recent branch. Every sibling branch is eventually explored, which gives
/// the same result as [match_breadth_first](crate::query::match_breadth_first).
pub fn match_branch_resuming<G: LabelledGraph>(graph: &G, read: &[u8]) -> OrganismSet {
    let Some(&first) = read.first() else {
        return OrganismSet::new();
    };

    let mut resume_points: Vec<ResumePoint> = Vec::new();
    let mut matches: Vec<OrganismSet> = Vec::new();

    // Seeds in reverse so the stack pops them in node order
    let seeds: Vec<ResumePoint> = (0..graph.num_nodes())
        .flat_map(|node| graph.out_edges(node))
        .filter(|edge| edge.symbol == first)
        .map(|edge| ResumePoint {
            node: edge.target,
            position: 1,
            organisms: edge.organisms.clone(),
        })
        .collect();
    resume_points.extend(seeds.into_iter().rev());

    while let Some(ResumePoint { mut node, mut position, mut organisms }) = resume_points.pop() {
        loop {
            if position == read.len() {
                matches.push(organisms);
                break;
            }

            let symbol = read[position];
            let mut extensions = graph.out_edges(node).filter_map(|edge| {
                if edge.symbol != symbol {
                    return None;
                }
                let carried: OrganismSet = organisms.intersection(edge.organisms).copied().collect();
                (!carried.is_empty()).then_some((edge.target, carried))
            });

            let Some((next_node, next_organisms)) = extensions.next() else {
                log::trace!("Path died at position {}, {} branches left", position, resume_points.len());
                break;
            };

            // Branch: remember the siblings, keeping the stack in edge order
            let siblings: Vec<ResumePoint> = extensions
                .map(|(target, carried)| ResumePoint {
                    node: target,
                    position: position + 1,
                    organisms: carried,
                })
                .collect();
            resume_points.extend(siblings.into_iter().rev());

            node = next_node;
            organisms = next_organisms;
            position += 1;
        }
    }

    resolve_matches(read, &matches)
}
