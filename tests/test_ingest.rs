use kmertag::builder::BuildError;
use kmertag::ingest::{AlignedRow, Alignment, AlignmentIngestor, linearize, read_alignment, windows};
use std::io::Write;
use tempfile::NamedTempFile;

fn fasta_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// --- LINEARIZATION AND WINDOWS ---
#[test]
fn test_linearize_strips_gaps_and_appends_terminator() {
    assert_eq!(linearize("--AC-G.T--", None), "ACGT$");
    assert_eq!(linearize("----", None), "$");
}

#[test]
fn test_linearize_truncates_after_gap_removal() {
    assert_eq!(linearize("A--CGT", Some(3)), "ACG$");
    assert_eq!(linearize("ACGT", Some(0)), "$");
}

#[test]
fn test_windows_end_with_terminator() {
    assert_eq!(windows("ACGT$", 2), ["AC", "CG", "GT", "T$", "$"]);
    assert_eq!(windows("$", 2), ["$"]);
}

#[test]
fn test_single_symbol_windows() {
    assert_eq!(windows("ACG$", 1), ["A", "C", "G", "$"]);
}

// --- INGESTOR ---
#[test]
fn test_ingest_respects_row_cap() {
    let alignment = Alignment::from_rows(
        "org",
        vec![
            AlignedRow::new("r0", "ACGT"),
            AlignedRow::new("r1", "AC-T"),
            AlignedRow::new("r2", "TTTT"),
        ],
    )
    .unwrap();

    let organism = AlignmentIngestor::new(2).with_max_rows(2).ingest(&alignment);
    assert_eq!(organism.rows.len(), 2);
    assert_eq!(organism.rows[1].sequence, "ACT$");
    assert_eq!(organism.column, 4);

    // Fewer rows than the cap uses all rows
    let organism = AlignmentIngestor::new(2).with_max_rows(10).ingest(&alignment);
    assert_eq!(organism.rows.len(), 3);
}

#[test]
fn test_ingest_respects_length_cap() {
    let alignment = Alignment::from_rows("org", vec![AlignedRow::new("r0", "A-CGTACGT")]).unwrap();
    let organism = AlignmentIngestor::new(2).with_max_seq_len(4).ingest(&alignment);
    assert_eq!(organism.rows[0].sequence, "ACGT$");
    assert_eq!(organism.rows[0].kmers.len(), 5);
}

#[test]
fn test_distinct_kmers_sorted_and_deduplicated() {
    let alignment = Alignment::from_rows(
        "org",
        vec![AlignedRow::new("r0", "ACAC"), AlignedRow::new("r1", "CACA")],
    )
    .unwrap();
    let organism = AlignmentIngestor::new(2).ingest(&alignment);
    let kmers: Vec<&str> = organism.distinct_kmers().into_iter().collect();
    assert_eq!(kmers, ["$", "A$", "AC", "C$", "CA"]);
}

// --- ALIGNMENT VALIDATION ---
#[test]
fn test_unequal_row_lengths_rejected() {
    let result = Alignment::from_rows(
        "org",
        vec![AlignedRow::new("r0", "ACGT"), AlignedRow::new("r1", "ACG")],
    );
    assert!(matches!(result, Err(BuildError::MalformedAlignment { .. })));
}

#[test]
fn test_terminator_in_input_rejected() {
    let result = Alignment::from_rows("org", vec![AlignedRow::new("r0", "AC$T")]);
    assert!(matches!(result, Err(BuildError::MalformedAlignment { .. })));
}

#[test]
fn test_empty_alignment_rejected() {
    let result = Alignment::from_rows("org", Vec::new());
    assert!(matches!(result, Err(BuildError::EmptyAlignment(_))));
}

// --- FASTA FILES ---
#[test]
fn test_read_alignment_file() {
    let file = fasta_file(">row0 first\nAC-GT\n>row1\nACAGT\n");
    let alignment = read_alignment(file.path()).unwrap();

    assert_eq!(alignment.num_rows(), 2);
    assert_eq!(alignment.length(), 5);
    assert_eq!(alignment.rows()[0].id, "row0");
    assert_eq!(alignment.rows()[0].seq, "AC-GT");
}

#[test]
fn test_read_empty_fasta_file() {
    let file = fasta_file("");
    assert!(matches!(read_alignment(file.path()), Err(BuildError::EmptyAlignment(_))));
}

#[test]
fn test_read_missing_file() {
    let result = read_alignment("does/not/exist.fasta");
    assert!(matches!(result, Err(BuildError::Io { .. })));
}
