use kmertag::builder::{BuildConfig, KmerGraphBuilder};
use kmertag::dot::{parse_str, to_dot_string};
use kmertag::ingest::{AlignedRow, Alignment};
use kmertag::model::{EdgeGraph, EdgeLabel, KmerGraph, OrganismSet};
use kmertag::query::{Classification, MatchStrategy, QueryEngine, match_branch_resuming, match_breadth_first};
use proptest::prelude::*;

fn build(organisms: &[&str]) -> KmerGraph {
    let mut builder = KmerGraphBuilder::new(BuildConfig::new()).unwrap();
    for (i, seq) in organisms.iter().enumerate() {
        let alignment = Alignment::from_rows(format!("org{i}"), vec![AlignedRow::new("r0", *seq)]).unwrap();
        builder.add_alignment(&alignment).unwrap();
    }
    builder.finish()
}

fn organisms(ids: &[u32]) -> OrganismSet {
    ids.iter().copied().collect()
}

// --- SCENARIO ---
#[test]
fn test_scenario_queries() {
    let graph = build(&["ACGT", "ACGA"]);
    for strategy in [MatchStrategy::BreadthFirst, MatchStrategy::BranchResuming] {
        let engine = QueryEngine::new(&graph).with_strategy(strategy);
        assert_eq!(engine.query("ACGT"), organisms(&[0]), "{strategy:?}");
        assert_eq!(engine.query("ACGA"), organisms(&[1]), "{strategy:?}");
        assert_eq!(engine.query("TTTT"), organisms(&[]), "{strategy:?}");
    }
}

#[test]
fn test_divergent_paths_return_union() {
    let graph = build(&["ACGT", "ACGA"]);
    // Two surviving paths: via GT with {0}, via GA with {1}
    assert_eq!(match_breadth_first(&graph, b"ACG"), organisms(&[0, 1]));
    assert_eq!(match_branch_resuming(&graph, b"ACG"), organisms(&[0, 1]));
}

#[test]
fn test_shared_prefix_matches_both() {
    let graph = build(&["ACGT", "ACGA"]);
    assert_eq!(QueryEngine::new(&graph).query("AC"), organisms(&[0, 1]));
}

#[test]
fn test_empty_read() {
    let graph = build(&["ACGT"]);
    assert!(QueryEngine::new(&graph).query("").is_empty());
    assert!(match_branch_resuming(&graph, b"").is_empty());
}

#[test]
fn test_empty_graph() {
    let graph = EdgeGraph::new();
    assert!(QueryEngine::new(&graph).query("ACGT").is_empty());
    assert!(match_branch_resuming(&graph, b"ACGT").is_empty());
}

#[test]
fn test_read_spanning_terminator_not_matched_across_organisms() {
    let graph = build(&["ACGT", "TTAC"]);
    // GT -> T$ belongs to org 0 only, $ -> TT ... to org 1 only
    assert!(QueryEngine::new(&graph).query("GT$TT").is_empty());
}

#[test]
fn test_query_on_handwritten_graph() {
    let mut graph = EdgeGraph::new();
    let s0 = graph.get_or_insert_node("S0");
    let s1 = graph.get_or_insert_node("S1");
    let s2 = graph.get_or_insert_node("S2");
    graph.add_edge(s0, s1, EdgeLabel::new(b'A', organisms(&[0, 1, 2])));
    graph.add_edge(s1, s2, EdgeLabel::new(b'C', organisms(&[1, 2])));
    graph.add_edge(s1, s2, EdgeLabel::new(b'G', organisms(&[0])));

    let engine = QueryEngine::new(&graph);
    assert_eq!(engine.query("AC"), organisms(&[1, 2]));
    assert_eq!(engine.query("AG"), organisms(&[0]));
    assert_eq!(engine.query("C"), organisms(&[1, 2]));
    assert!(engine.query("AT").is_empty());
}

// --- CLASSIFICATION ---
#[test]
fn test_classification() {
    let graph = build(&["ACGT", "ACGA"]);
    let engine = QueryEngine::new(&graph);
    assert_eq!(engine.classify("ACGT"), Classification::Unique(0));
    assert_eq!(engine.classify("AC"), Classification::Ambiguous(organisms(&[0, 1])));
    assert_eq!(engine.classify("TTTT"), Classification::Unrecognized);
}

#[test]
fn test_default_strategy() {
    let graph = build(&["ACGT"]);
    assert_eq!(QueryEngine::new(&graph).strategy(), MatchStrategy::BreadthFirst);
}

// --- LOADED GRAPHS ---
#[test]
fn test_loaded_graph_answers_like_built_graph() {
    let graph = build(&["ACGTTGCA", "ACGAAGCT", "TTGCAACG"]);
    let loaded = parse_str(to_dot_string(&graph)).unwrap();

    for read in ["ACG", "TTGC", "GCA", "AAGCT", "CAAC", "GGGG", "A"] {
        assert_eq!(
            QueryEngine::new(&loaded).query(read),
            QueryEngine::new(&graph).query(read),
            "read {read}"
        );
    }
}

// --- PROPERTIES ---
proptest! {
    #[test]
    fn prop_substring_matches_its_organism(
        seqs in prop::collection::vec("[ACGT]{4,20}", 1..4),
        pick in any::<prop::sample::Index>(),
        start in any::<prop::sample::Index>(),
        len in 1usize..8,
    ) {
        let refs: Vec<&str> = seqs.iter().map(|s| s.as_str()).collect();
        let graph = build(&refs);

        let organism = pick.index(seqs.len());
        let seq = &seqs[organism];
        let start = start.index(seq.len());
        let end = (start + len).min(seq.len());
        let read = &seq[start..end];

        let result = QueryEngine::new(&graph).query(read);
        prop_assert!(result.contains(&(organism as u32)), "read {} of organism {} gave {:?}", read, organism, result);
    }

    #[test]
    fn prop_strategies_agree(
        seqs in prop::collection::vec("[ACGT]{1,20}", 1..5),
        reads in prop::collection::vec("[ACGT$]{0,8}", 1..10),
    ) {
        let refs: Vec<&str> = seqs.iter().map(|s| s.as_str()).collect();
        let graph = build(&refs);
        let loaded = parse_str(to_dot_string(&graph)).unwrap();

        for read in &reads {
            let expected = match_breadth_first(&graph, read.as_bytes());
            prop_assert_eq!(&match_branch_resuming(&graph, read.as_bytes()), &expected);
            prop_assert_eq!(&match_breadth_first(&loaded, read.as_bytes()), &expected);
            prop_assert_eq!(&match_branch_resuming(&loaded, read.as_bytes()), &expected);
        }
    }
}
