use kmertag::builder::{BuildConfig, BuildError, KmerGraphBuilder, build_from_files};
use kmertag::dot::to_dot_string;
use kmertag::ingest::{AlignedRow, Alignment, linearize, windows};
use kmertag::model::{KmerGraph, OrganismSet};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn alignment(name: &str, rows: &[&str]) -> Alignment {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, seq)| AlignedRow::new(format!("row{i}"), *seq))
        .collect();
    Alignment::from_rows(name, rows).unwrap()
}

fn build(config: BuildConfig, organisms: &[Alignment]) -> KmerGraph {
    let mut builder = KmerGraphBuilder::new(config).unwrap();
    for organism in organisms {
        builder.add_alignment(organism).unwrap();
    }
    builder.finish()
}

fn scenario_graph() -> KmerGraph {
    build(
        BuildConfig::new().with_kmer_len(3),
        &[alignment("org0", &["ACGT"]), alignment("org1", &["ACGA"])],
    )
}

fn organisms(ids: &[u32]) -> OrganismSet {
    ids.iter().copied().collect()
}

// --- SCENARIO ---
#[test]
fn test_scenario_nodes() {
    let graph = scenario_graph();

    let expected = [
        ("$", 0, vec![0, 1]),
        ("AC", 1, vec![0, 1]),
        ("CG", 2, vec![0, 1]),
        ("GT", 3, vec![0]),
        ("T$", 4, vec![0]),
        ("A$", 5, vec![1]),
        ("GA", 6, vec![1]),
    ];
    assert_eq!(graph.num_nodes(), expected.len());
    for (kmer, id, orgs) in expected {
        let node = graph.node_by_kmer(kmer).unwrap();
        assert_eq!(node.id(), id, "id of {kmer}");
        assert_eq!(node.organisms(), &organisms(&orgs), "organisms of {kmer}");
        assert_eq!(node.column(), 4);
    }
    assert_eq!(graph.root(), Some(0));
}

#[test]
fn test_scenario_edges() {
    let graph = scenario_graph();
    assert_eq!(graph.num_edges(), 8);

    let id = |kmer: &str| graph.id_of(kmer).unwrap();
    assert_eq!(graph[id("$")].children(), [id("AC")]);
    assert_eq!(graph[id("AC")].children(), [id("CG")]);
    assert_eq!(graph[id("CG")].children(), [id("GT"), id("GA")]);
    assert_eq!(graph[id("T$")].children(), [id("$")]);
    assert_eq!(graph[id("A$")].children(), [id("$")]);
    assert_eq!(graph[id("$")].parents(), [id("T$"), id("A$")]);
}

#[test]
fn test_organism_ids_follow_insertion_order() {
    let mut builder = KmerGraphBuilder::new(BuildConfig::new()).unwrap();
    assert_eq!(builder.add_alignment(&alignment("a", &["AAA"])).unwrap(), 0);
    assert_eq!(builder.add_alignment(&alignment("b", &["CCC"])).unwrap(), 1);
    assert_eq!(builder.add_alignment(&alignment("c", &["GGG"])).unwrap(), 2);
    assert_eq!(builder.num_organisms(), 3);
}

#[test]
fn test_node_ids_not_reset_between_organisms() {
    let graph = build(
        BuildConfig::new(),
        &[alignment("a", &["AAA"]), alignment("b", &["CCC"])],
    );
    let ids: Vec<usize> = graph.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids, (0..graph.num_nodes()).collect::<Vec<_>>());
    assert!(graph.node_by_kmer("CC").unwrap().id() > graph.node_by_kmer("AA").unwrap().id());
}

#[test]
fn test_repeated_edges_recorded_once() {
    let graph = build(BuildConfig::new(), &[alignment("a", &["ACACAC", "ACACAC"])]);
    let ac = graph.id_of("AC").unwrap();
    let ca = graph.id_of("CA").unwrap();
    assert_eq!(graph[ac].children().iter().filter(|&&c| c == ca).count(), 1);
    assert_eq!(graph[ca].parents().iter().filter(|&&p| p == ac).count(), 1);
}

#[test]
fn test_gap_only_row_adds_no_edges() {
    let graph = build(BuildConfig::new(), &[alignment("a", &["----"])]);
    assert_eq!(graph.num_nodes(), 1);
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn test_single_symbol_variant() {
    let graph = build(
        BuildConfig::new().with_kmer_len(2),
        &[alignment("a", &["ACG"])],
    );
    let labels: Vec<&str> = graph.nodes().iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["$", "A", "C", "G"]);
    assert_eq!(graph.num_edges(), 4);
}

#[test]
fn test_max_seq_len_truncates() {
    let graph = build(
        BuildConfig::new().with_max_seq_len(2),
        &[alignment("a", &["ACGT"])],
    );
    assert!(graph.node_by_kmer("AC").is_some());
    assert!(graph.node_by_kmer("CG").is_none());
    assert!(graph.node_by_kmer("C$").is_some());
}

// --- CONFIGURATION ---
#[test]
fn test_invalid_kmer_len() {
    let result = KmerGraphBuilder::new(BuildConfig::new().with_kmer_len(1));
    assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
}

#[test]
fn test_invalid_max_rows() {
    let result = KmerGraphBuilder::new(BuildConfig::new().with_max_rows(0));
    assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
}

#[test]
fn test_default_config() {
    let config = BuildConfig::new();
    assert_eq!(config.kmer_len(), 3);
    assert_eq!(config.window_len(), 2);
    assert_eq!(config.max_rows(), 3);
    assert_eq!(config.max_seq_len(), None);
}

// --- FILES ---
#[test]
fn test_build_from_files() {
    let mut org0 = NamedTempFile::new().unwrap();
    writeln!(org0, ">r0\nACGT").unwrap();
    let mut org1 = NamedTempFile::new().unwrap();
    writeln!(org1, ">r0\nACGA").unwrap();

    let graph = build_from_files(&[org0.path(), org1.path()], BuildConfig::new()).unwrap();
    assert_eq!(to_dot_string(&graph), to_dot_string(&scenario_graph()));
}

#[test]
fn test_malformed_file_aborts_build() {
    let mut good = NamedTempFile::new().unwrap();
    writeln!(good, ">r0\nACGT").unwrap();
    let mut bad = NamedTempFile::new().unwrap();
    writeln!(bad, ">r0\nACGT\n>r1\nACG").unwrap();

    let result = build_from_files(&[good.path(), bad.path()], BuildConfig::new());
    assert!(matches!(result, Err(BuildError::MalformedAlignment { .. })));
}

// --- PROPERTIES ---
fn dna_rows() -> impl Strategy<Value = Vec<String>> {
    // Rows of one alignment share their length
    (1usize..12).prop_flat_map(|len| {
        let row = proptest::string::string_regex(&format!("[ACGT-]{{{len}}}")).unwrap();
        prop::collection::vec(row, 1..4)
    })
}

proptest! {
    #[test]
    fn prop_build_is_deterministic(org0 in dna_rows(), org1 in dna_rows()) {
        let rows0: Vec<&str> = org0.iter().map(|s| s.as_str()).collect();
        let rows1: Vec<&str> = org1.iter().map(|s| s.as_str()).collect();
        let organisms = [alignment("a", &rows0), alignment("b", &rows1)];

        let first = build(BuildConfig::new(), &organisms);
        let second = build(BuildConfig::new(), &organisms);
        prop_assert_eq!(to_dot_string(&first), to_dot_string(&second));
    }

    #[test]
    fn prop_node_organisms_match_containing_organisms(org0 in dna_rows(), org1 in dna_rows()) {
        let all_rows = [org0, org1];
        let organisms: Vec<Alignment> = all_rows
            .iter()
            .map(|rows| alignment("org", &rows.iter().map(|s| s.as_str()).collect::<Vec<_>>()))
            .collect();
        let graph = build(BuildConfig::new(), &organisms);

        for node in graph.nodes() {
            let expected: OrganismSet = all_rows
                .iter()
                .enumerate()
                .filter(|(_, rows)| {
                    rows.iter().take(3).any(|row| windows(&linearize(row, None), 2).iter().any(|k| k == node.label()))
                })
                .map(|(id, _)| id as u32)
                .collect();
            prop_assert_eq!(node.organisms(), &expected);
        }
    }
}
